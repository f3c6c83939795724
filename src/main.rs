// src/main.rs

mod app_logic;
mod core;

use crate::app_logic::{BrowserLogic, SearchOutcome, TreeRow, View};
use crate::core::path_utils::{self, APP_NAME};
use crate::core::settings::SETTINGS_FILENAME;
use crate::core::{
    Breadcrumb, ConfigManagerOperations, CoreConfigManager, CoreDirectoryLister, CoreDocumentReader,
    CoreSettingsStore,
};

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

const LOG_FILENAME: &str = "tutorial_browser.log";
const DEFAULT_CONTENT_ROOT: &str = "tutorials";

/*
 * Terminal logging at Info (Debug in debug builds) plus a Debug-level log file
 * in the config directory. If the file cannot be created only the terminal
 * logger is installed.
 */
fn initialize_logging() {
    let term_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let mut file_error = None;
    match path_utils::app_config_file(APP_NAME, LOG_FILENAME) {
        Some(log_path) => match File::create(&log_path) {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file)),
            Err(e) => file_error = Some(format!("Could not create log file {log_path:?}: {e}")),
        },
        None => file_error = Some("No config directory for the log file".to_string()),
    }

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("Failed to initialize logger: {e}");
        return;
    }
    if let Some(message) = file_error {
        log::warn!("Main: {message}, logging to terminal only");
    }
}

/* Command line argument first, then the remembered root, then `./tutorials`. */
fn resolve_content_root(config_manager: &dyn ConfigManagerOperations) -> PathBuf {
    if let Some(arg) = std::env::args().nth(1) {
        return PathBuf::from(arg);
    }
    match config_manager.load_last_content_root(APP_NAME) {
        Ok(Some(root)) => return root,
        Ok(None) => {}
        Err(e) => log::warn!("Main: Could not load the last content root: {e}"),
    }
    PathBuf::from(DEFAULT_CONTENT_ROOT)
}

fn open_settings_store() -> CoreSettingsStore {
    match CoreSettingsStore::open(APP_NAME) {
        Ok(store) => store,
        Err(e) => {
            let fallback = std::env::temp_dir().join(APP_NAME).join(SETTINGS_FILENAME);
            log::warn!("Main: Settings unavailable ({e}), using {fallback:?}");
            CoreSettingsStore::open_at(fallback)
        }
    }
}

fn print_view(view: &View, zoom_percent: u16) {
    match view {
        View::Home { categories } => {
            println!("== Home ==");
            for entry in categories {
                let marker = if entry.is_folder { "+" } else { " " };
                println!(" {marker} {}  [{}]", entry.title, entry.path);
            }
        }
        View::Folder {
            title,
            entries,
            breadcrumbs,
            ..
        } => {
            print_breadcrumbs(breadcrumbs);
            println!("== {title} ==");
            for entry in entries {
                let marker = if entry.is_folder { "+" } else { " " };
                println!(" {marker} {}  [{}]", entry.title, entry.path);
            }
        }
        View::Tutorial {
            title,
            html,
            breadcrumbs,
            prev,
            next,
            ..
        } => {
            print_breadcrumbs(breadcrumbs);
            println!("== {title} == (zoom {zoom_percent}%)");
            println!("{html}");
            if let Some(link) = prev {
                println!("<< prev: {}  [{}]", link.title, link.path);
            }
            if let Some(link) = next {
                println!(">> next: {}  [{}]", link.title, link.path);
            }
        }
    }
}

fn print_breadcrumbs(breadcrumbs: &[Breadcrumb]) {
    let trail: Vec<String> = std::iter::once("Home".to_string())
        .chain(breadcrumbs.iter().map(|b| format!("{} [{}]", b.title, b.path)))
        .collect();
    println!("{}", trail.join(" > "));
}

fn print_tree(rows: &[TreeRow]) {
    for row in rows {
        let marker = match (row.is_folder, row.expanded) {
            (true, true) => "-",
            (true, false) => "+",
            (false, _) => " ",
        };
        println!("{}{marker} {}  [{}]", "  ".repeat(row.depth), row.title, row.path);
    }
}

fn print_search(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Inactive => println!("(empty query)"),
        SearchOutcome::Results(hits) if hits.is_empty() => println!("No matches."),
        SearchOutcome::Results(hits) => {
            for hit in hits {
                println!(
                    " {} {} ({})  [{}] ({:?} match)",
                    if hit.is_folder { "+" } else { " " },
                    hit.title,
                    hit.key,
                    hit.path,
                    hit.match_type
                );
            }
        }
    }
}

fn print_help() {
    println!(
        "Commands: open <path>, home, back, history, next, prev, search <query>, toggle <path>, tree, refresh, zoom <percent>, help, quit"
    );
}

/* Returns false when the user asked to quit. */
fn run_command(logic: &mut BrowserLogic, line: &str) -> bool {
    let (command, argument) = match line.trim().split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line.trim(), ""),
    };
    log::debug!("Main: Command '{command}' with argument '{argument}'");

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "help" => print_help(),
        "home" => {
            let zoom = logic.zoom_percent();
            print_view(logic.open_home(), zoom);
        }
        "open" => {
            let zoom = logic.zoom_percent();
            match logic.open(argument) {
                Some(view) => print_view(view, zoom),
                None => println!("Not found: '{argument}'"),
            }
        }
        "back" => {
            if !logic.can_go_back() {
                println!("Nothing to go back to.");
                return true;
            }
            let zoom = logic.zoom_percent();
            if let Some(view) = logic.go_back() {
                print_view(view, zoom);
            }
        }
        "history" => {
            let entries = logic.back_entries();
            if entries.is_empty() {
                println!("Nothing to go back to.");
            }
            for (steps, entry) in entries.iter().rev().enumerate() {
                println!(" {:>2}. {} ({:?})  [{}]", steps + 1, entry.title, entry.kind, entry.path);
            }
        }
        "next" => {
            let zoom = logic.zoom_percent();
            match logic.go_next() {
                Some(view) => print_view(view, zoom),
                None => println!("No next tutorial."),
            }
        }
        "prev" => {
            let zoom = logic.zoom_percent();
            match logic.go_prev() {
                Some(view) => print_view(view, zoom),
                None => println!("No previous tutorial."),
            }
        }
        "search" => print_search(&logic.search(argument)),
        "toggle" => match logic.toggle_folder(argument) {
            Some(true) => println!("Expanded '{argument}'"),
            Some(false) => println!("Collapsed '{argument}'"),
            None => println!("Not a folder: '{argument}'"),
        },
        "tree" => print_tree(&logic.visible_tree_rows()),
        "refresh" => {
            let zoom = logic.zoom_percent();
            print_view(logic.refresh(), zoom);
        }
        "zoom" => match argument.parse::<u16>() {
            Ok(percent) => println!("Zoom set to {}%", logic.set_zoom(percent)),
            Err(_) => println!("Zoom is {}%", logic.zoom_percent()),
        },
        other => {
            println!("Unknown command '{other}'");
            print_help();
        }
    }
    true
}

fn main() -> io::Result<()> {
    initialize_logging();
    log::info!("Main: Starting {APP_NAME}");

    let config_manager = CoreConfigManager::new();
    let content_root = resolve_content_root(&config_manager);
    log::info!("Main: Content root {content_root:?}");
    if let Err(e) = config_manager.save_last_content_root(APP_NAME, Some(content_root.as_path())) {
        log::warn!("Main: Could not remember content root: {e}");
    }

    let mut logic = BrowserLogic::new(
        Arc::new(CoreDirectoryLister::new(&content_root)),
        Arc::new(CoreDocumentReader::new(&content_root)),
        Arc::new(open_settings_store()),
    );
    logic.initialize();
    if let Some(view) = logic.current_view() {
        print_view(view, logic.zoom_percent());
    }
    if logic.using_fallback() {
        println!("(No tutorials found in {content_root:?}; showing the built-in guide.)");
    }
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !run_command(&mut logic, &line) {
            break;
        }
    }

    log::info!("Main: Exiting");
    Ok(())
}
