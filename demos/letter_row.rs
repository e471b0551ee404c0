//! Letter row demo: the terminal host around an in-memory page.
//!
//! Type five letters, press Enter to submit. Words in the list replace the
//! whole form (status 200, row resets); anything else gets an error message
//! swapped in with status 422 and the letters stay. F2 flips the theme,
//! Esc quits.
//!
//! Set `LETTR_LOG_FILE=/tmp/lettr.log` to capture debug logs.

use lettr_input::{Document, Element, Engine, InputConfig, MemoryThemeStore, RowSession, ThemeSwitch};
use std::fs::File;
use std::io;

const CELLS: usize = 5;
const WORDS: &[&str] = &["crane", "slate", "lettr", "hello", "world", "proxy", "swaps"];

fn form(message: &str) -> Vec<Element> {
    let mut elements = vec![Element::new("title").with_value("l e t t r")];
    elements.extend((0..CELLS).map(|i| Element::new(format!("letter-{i}")).with_class("focusable")));
    elements.push(Element::new("any-errors").with_value(message));
    elements
}

fn init_logging() {
    let Ok(path) = std::env::var("LETTR_LOG_FILE") else {
        return;
    };
    let Ok(file) = File::create(path) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn main() -> io::Result<()> {
    init_logging();

    let document = Document::from_elements(form(""));
    let theme = ThemeSwitch::new(MemoryThemeStore::default(), true);
    let mut solved = 0;
    let responder = move |word: &str, document: &Document| -> Option<u16> {
        if WORDS.contains(&word.to_lowercase().as_str()) {
            solved += 1;
            document.swap(form(&format!("{word} accepted, {solved} so far")));
            None
        } else {
            document.replace(
                "any-errors",
                Element::new("any-errors").with_value("word not in word list"),
            );
            Some(422)
        }
    };

    let mut session = RowSession::new(document, InputConfig::default(), theme, responder);
    let mut engine = Engine::new()?;
    engine.run(&mut session);
    Ok(())
}
