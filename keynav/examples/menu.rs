use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

use keynav::{FocusHandle, KeyPress, Navigator, Node, Orientation};

fn entry(id: &str, text: &str, submenu: Option<Node>) -> Node {
    let item = Node::new().child(Node::text(text).id(id));
    match submenu {
        Some(submenu) => item.child(submenu),
        None => item,
    }
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("/tmp/keynav-menu.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = Node::new()
        .id("menubar")
        .child(entry(
            "file",
            "File",
            Some(
                Node::new()
                    .id("file-menu")
                    .child(entry("new", "New", None))
                    .child(entry("open", "Open", None))
                    .child(entry("save", "Save", None)),
            ),
        ))
        .child(entry("edit", "Edit", None))
        .child(entry("view", "View", None));

    // One navigator per menu level, as each level roves independently
    let mut top = Navigator::menu(Orientation::Horizontal);
    for id in ["file", "edit", "view"] {
        top.subscribe(id, root.find(id).expect("item registered"));
    }
    let mut sub = Navigator::menu(Orientation::Vertical);
    for id in ["new", "open", "save"] {
        sub.subscribe(id, root.find(id).expect("item registered"));
    }

    root.find("file").expect("item registered").focus();

    println!("Arrows rove, Enter/Space open, Escape closes, letters type-ahead, q quits");
    terminal::enable_raw_mode()?;
    let result = run(&top, &sub, &root);
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn run(top: &Navigator<Node>, sub: &Navigator<Node>, root: &Node) -> io::Result<()> {
    loop {
        render(root)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('q') {
                return Ok(());
            }

            // Route to the level that owns the focused label
            let current = root.focused_id().unwrap_or_default();
            let nav = if top.registry().index_of(&current).is_some() {
                top
            } else {
                sub
            };
            let mut press = KeyPress::from(key);
            nav.on_key(&mut press, &current);
        }
    }
}

fn render(root: &Node) -> io::Result<()> {
    let mut line = String::new();
    for id in ["file", "edit", "view"] {
        let item = root.find(id).expect("item exists");
        let title = item.text().unwrap_or_default();
        if item.is_focused() {
            line.push_str(&format!("[{title}] "));
        } else {
            line.push_str(&format!(" {title}  "));
        }
    }
    if root.find("file-menu").expect("submenu exists").is_open() {
        line.push_str("| File: ");
        for id in ["new", "open", "save"] {
            let item = root.find(id).expect("item exists");
            let title = item.text().unwrap_or_default();
            if item.is_focused() {
                line.push_str(&format!("[{title}] "));
            } else {
                line.push_str(&format!(" {title}  "));
            }
        }
    }
    print!("\r\x1b[K{line}");
    io::stdout().flush()
}
