// Integration tests for codexglyph-manual

use codexglyph_manual::app::keymap::Menu;
use codexglyph_manual::app::{AppState, ExitReason, Mode, Settings, Theme};
use codexglyph_manual::content::{ContentStore, Section};
use codexglyph_manual::term::{Input, ScriptedConsole};
use codexglyph_manual::ui;

fn quiet_app(store: &ContentStore) -> AppState<'_> {
    let settings = Settings {
        show_splash: false,
        ..Settings::default()
    };
    AppState::new(store, Menu::manual(), settings, Theme::plain())
}

// 1) Browse every displayable section, then exit
#[test]
fn every_menu_section_is_shown_verbatim() {
    let store = ContentStore::manual().unwrap();
    let mut app = quiet_app(&store);

    let tokens = [
        "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "q", "g", "a",
    ];
    let mut script = Vec::new();
    for t in tokens {
        script.push(t);
        script.push("");
    }
    script.push("X");
    let mut out = ScriptedConsole::new(script);

    let reason = codexglyph_manual::app::run(&mut out, &mut app).unwrap();
    assert_eq!(reason, ExitReason::Farewell);
    assert_eq!(app.mode, Mode::Terminated(ExitReason::Farewell));

    for key in [
        "part1", "part2", "part3", "part4", "part5", "part6", "part7", "part8", "part9", "part10",
        "part11", "part12", "part13", "quick_ref", "glossary", "about",
    ] {
        let text = store.get(key).unwrap();
        assert_eq!(out.output.iter().filter(|l| *l == text).count(), 1, "{key}");
    }
    assert_eq!(out.remaining(), 0);
    assert_eq!(out.count(ui::FAREWELL), 1);
    assert_eq!(out.count("Invalid selection"), 0);
}

// 2) Invalid selection, search, then interrupt
#[test]
fn invalid_then_search_then_interrupt() {
    let store = ContentStore::manual().unwrap();
    let mut app = quiet_app(&store);
    let mut out = ScriptedConsole::new(["99", "", "s", "tilde", ""]).then(Input::Interrupted);

    let reason = codexglyph_manual::app::run(&mut out, &mut app).unwrap();
    assert_eq!(reason, ExitReason::Interrupted);
    assert_eq!(out.count("Invalid selection"), 1);
    assert!(out.output.iter().any(|l| l.starts_with("Found ") && l.ends_with("for 'tilde':")));
    assert!(out.output.iter().any(|l| l == "\n[PART3] Line 2:"));
    assert_eq!(out.count("Interrupted by user"), 1);
    assert_eq!(out.count(ui::FAREWELL), 0);

    let transcript = out.transcript();
    let invalid = transcript.find("Invalid selection").unwrap();
    let found = transcript.find("for 'tilde':").unwrap();
    let interrupted = transcript.find("Interrupted by user").unwrap();
    assert!(invalid < found && found < interrupted);
}

// 3) Screen is cleared before each menu and each section
#[test]
fn screen_clears_before_menu_and_section() {
    let store = ContentStore::manual().unwrap();
    let mut app = quiet_app(&store);
    let mut out = ScriptedConsole::new(["1", "", "x"]);
    codexglyph_manual::app::run(&mut out, &mut app).unwrap();
    // menu, section, menu, farewell
    assert_eq!(out.clears, 4);
}

// 4) A line injected into custom content is found again by search
#[test]
fn injected_line_round_trips_through_the_viewer() {
    let marker = "needle-in-haystack 42";
    let text = format!("first\nsecond\n   {marker}   \nlast");
    let store = ContentStore::new([
        Section::new("header", "Header", "BANNER"),
        Section::new("part1", "Foundation", text),
    ])
    .unwrap();
    let menu = Menu::new(
        &[codexglyph_manual::app::keymap::MenuEntry {
            token: "1",
            label: "Foundation",
            action: codexglyph_manual::app::keymap::MenuAction::Show("part1"),
        }],
        &[
            codexglyph_manual::app::keymap::MenuEntry {
                token: "S",
                label: "Search",
                action: codexglyph_manual::app::keymap::MenuAction::Search,
            },
            codexglyph_manual::app::keymap::MenuEntry {
                token: "X",
                label: "Exit",
                action: codexglyph_manual::app::keymap::MenuAction::Exit,
            },
        ],
    );
    let settings = Settings {
        show_splash: false,
        ..Settings::default()
    };
    let mut app = AppState::new(&store, menu, settings, Theme::plain());
    let mut out = ScriptedConsole::new(["S", "NEEDLE-IN-HAYSTACK 42", "", "X"]);

    codexglyph_manual::app::run(&mut out, &mut app).unwrap();
    assert!(out.output.contains(&"\n[PART1] Line 3:".to_string()));
    assert!(out.output.contains(&format!("  {marker}")));
    assert!(out.output.contains(&"BANNER".to_string()));
}

// 5) End of input before any selection
#[test]
fn closed_input_ends_without_farewell() {
    let store = ContentStore::manual().unwrap();
    let mut app = quiet_app(&store);
    let mut out = ScriptedConsole::default();
    let reason = codexglyph_manual::app::run(&mut out, &mut app).unwrap();
    assert_eq!(reason, ExitReason::InputClosed);
    assert_eq!(out.reads, 1);
    assert_eq!(out.count(ui::FAREWELL), 0);
}

// 6) SIGINT while the binary waits on piped stdin
#[cfg(unix)]
#[test]
fn sigint_at_the_menu_prompt_exits_cleanly() {
    use std::io::Read;
    use std::process::{Command, Stdio};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    let mut child = Command::new(env!("CARGO_BIN_EXE_codexglyph-manual"))
        .arg("--no-splash")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // Held open so the viewer blocks at the prompt instead of seeing EOF.
    let _stdin = child.stdin.take().unwrap();

    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut stdout = child.stdout.take().unwrap();
    let sink = Arc::clone(&captured);
    let reader = std::thread::spawn(move || {
        let mut chunk = [0u8; 4096];
        while let Ok(n) = stdout.read(&mut chunk) {
            if n == 0 {
                break;
            }
            sink.lock().unwrap().extend_from_slice(&chunk[..n]);
        }
    });

    let text = || String::from_utf8_lossy(&captured.lock().unwrap()).into_owned();
    let deadline = Instant::now() + Duration::from_secs(10);
    while !text().contains("Enter selection") {
        assert!(Instant::now() < deadline, "prompt never shown: {}", text());
        std::thread::sleep(Duration::from_millis(20));
    }

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    reader.join().unwrap();
    assert!(status.success(), "{status:?}");
    assert!(text().contains("Interrupted by user"), "{}", text());
}
