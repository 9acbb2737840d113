use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

use keynav::{FocusHandle, KeyPress, Navigator, Node, Orientation};

const TABS: [&str; 3] = ["tab1", "tab2", "tab3"];

fn main() -> std::io::Result<()> {
    let log_file = File::create("/tmp/keynav-tabs.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = Node::new()
        .id("tablist")
        .child(Node::text("Overview").id("tab1"))
        .child(Node::text("Details").id("tab2"))
        .child(Node::text("History").id("tab3"));

    let mut nav = Navigator::roving(Orientation::Horizontal);
    for id in TABS {
        nav.subscribe(id, root.find(id).expect("tab registered"));
    }
    root.find("tab1").expect("tab registered").focus();

    println!("Left/Right/Home/End move focus, q quits");
    terminal::enable_raw_mode()?;
    let result = run(&nav, &root);
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn run(nav: &Navigator<Node>, root: &Node) -> io::Result<()> {
    loop {
        render(root)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('q') {
                return Ok(());
            }

            let current = root.focused_id().unwrap_or_default();
            let mut press = KeyPress::from(key);
            nav.on_key(&mut press, &current);
        }
    }
}

fn render(root: &Node) -> io::Result<()> {
    let mut line = String::new();
    for id in TABS {
        let tab = root.find(id).expect("tab exists");
        let title = tab.text().unwrap_or_default();
        if tab.is_focused() {
            line.push_str(&format!("[{title}] "));
        } else {
            line.push_str(&format!(" {title}  "));
        }
    }
    print!("\r{line}");
    io::stdout().flush()
}
