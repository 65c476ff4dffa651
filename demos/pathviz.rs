//! Terminal pathfinding visualiser using crossterm.
//!
//! Run: cargo run --bin pathviz

use pathviz_crossterm::CrosstermDriver;
use pathviz_demos::{status, Session, SessionConfig, StatusLines};

fn main() {
    let lines = StatusLines::new(64);
    if let Err(e) = status::init(lines.clone()) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let mut session = match Session::new(SessionConfig::default(), CrosstermDriver::new(), lines) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = session.run();
    for report in session.reports() {
        println!("{report}");
    }
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
