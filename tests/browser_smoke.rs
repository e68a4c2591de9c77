//! Browser smoke tests: drives the built site in headless Chrome.
//!
//! Needs `trunk` and the `wasm32-unknown-unknown` target installed.
//! Run with: `cargo test --test browser_smoke -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn dist_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("dist")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let status = Command::new("trunk")
            .arg("build")
            .current_dir(&root)
            .status()
            .expect("failed to run trunk; is it installed?");
        assert!(status.success(), "trunk build failed");
        assert!(dist_dir().join("index.html").exists(), "dist/index.html missing");
    });
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn respond(mut stream: TcpStream, dist: &Path) {
    let mut reader = BufReader::new(&mut stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain the remaining headers.
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => return,
            Ok(_) if header.trim().is_empty() => break,
            Ok(_) => {}
        }
    }

    let raw_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let clean = raw_path.split('?').next().unwrap_or("/").trim_start_matches('/');
    let file = if clean.is_empty() {
        dist.join("index.html")
    } else {
        dist.join(clean)
    };

    let response = match std::fs::read(&file) {
        Ok(body) => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                mime_for(&file),
                body.len()
            );
            let mut out = head.into_bytes();
            out.extend_from_slice(&body);
            out
        }
        Err(_) => b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
    };
    let _ = stream.write_all(&response);
}

/// Serves `dist/` on an ephemeral port, returning the base URL. The server
/// thread lives for the whole test process.
fn site_url() -> &'static str {
    static URL: OnceLock<String> = OnceLock::new();
    URL.get_or_init(|| {
        ensure_site_built();
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let addr = listener.local_addr().expect("no local addr");
        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let dist = dist_dir();
                std::thread::spawn(move || respond(stream, &dist));
            }
        });
        format!("http://{addr}/")
    })
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 900)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

/// Navigates to the site and waits for the wasm app to mount.
fn load_site() -> Arc<Tab> {
    let tab = browser().new_tab().expect("failed to open tab");
    tab.navigate_to(site_url())
        .expect("navigation failed")
        .wait_until_navigated()
        .expect("page never loaded");
    tab.wait_for_element_with_custom_timeout(".hero-name", Duration::from_secs(20))
        .expect("app never mounted");
    tab
}

/// Polls `expr` until it evaluates to a string equal to `expected`.
fn wait_for_string(tab: &Tab, expr: &str, expected: &str, timeout: Duration) -> String {
    let deadline = Instant::now() + timeout;
    let mut last = String::new();
    while Instant::now() < deadline {
        if let Some(value) = tab
            .evaluate(expr, false)
            .ok()
            .and_then(|r| r.value)
            .and_then(|v| v.as_str().map(str::to_owned))
        {
            if value == expected {
                return value;
            }
            last = value;
        }
        std::thread::sleep(Duration::from_millis(250));
    }
    panic!("timed out waiting for {expected:?}; last saw {last:?}");
}

fn eval_bool(tab: &Tab, expr: &str) -> bool {
    tab.evaluate(expr, false)
        .expect("failed to evaluate JS")
        .value
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Polls `expr` until it evaluates to true.
fn wait_until(tab: &Tab, expr: &str, timeout: Duration, what: &str) {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if eval_bool(tab, expr) {
            return;
        }
        std::thread::sleep(Duration::from_millis(250));
    }
    panic!("timed out waiting for {what}");
}

/// Fills the three contact fields the way a user would, with input
/// events so the reactive bindings pick the values up.
fn fill_contact_form(tab: &Tab) {
    tab.evaluate(
        r#"(function() {
            const set = (sel, value) => {
                const el = document.querySelector(sel);
                el.value = value;
                el.dispatchEvent(new Event('input', { bubbles: true }));
            };
            set('#user_name', 'Ada Lovelace');
            set('#user_email', 'ada@example.com');
            set('#message', 'Hello from the form');
        })()"#,
        false,
    )
    .expect("failed to fill the form");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn hero_renders_the_owner_and_all_nav_links() {
    let tab = load_site();

    let name = tab
        .evaluate(r#"document.querySelector('.hero-name').textContent"#, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");
    assert_eq!(name.as_str(), Some("Biruk"));

    let links = tab
        .evaluate(r#"document.querySelectorAll('.nav-links a').length"#, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");
    assert_eq!(links.as_u64(), Some(5));
}

#[test]
#[ignore]
fn tagline_types_out_both_fragments_and_parks_the_cursor() {
    let tab = load_site();

    // The cursor span unmounts on completion, so the paragraph text only
    // equals the full tagline once typing has finished. 500ms startup +
    // 45 characters + one pause, with slack for CI.
    wait_for_string(
        &tab,
        r#"document.querySelector('.hero-tagline').textContent"#,
        "Aspiring Software Engineer | Front End Developer",
        Duration::from_secs(15),
    );

    let cursor = tab
        .evaluate(r#"document.querySelector('.typing-cursor') === null"#, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");
    assert_eq!(cursor.as_bool(), Some(true), "cursor still blinking");
}

#[test]
#[ignore]
fn clicking_a_nav_link_scrolls_and_moves_the_highlight() {
    let tab = load_site();

    tab.find_element(r##".nav-links a[href="#about"]"##)
        .expect("about link missing")
        .click()
        .expect("click failed");

    wait_until(
        &tab,
        r#"window.scrollY > 100
            && document.querySelector('.nav-links a.active')?.getAttribute('href') === '#about'"#,
        Duration::from_secs(10),
        "scroll or highlight",
    );
}

#[test]
#[ignore]
fn skill_bars_fill_once_the_panel_is_revealed() {
    let tab = load_site();

    tab.find_element(r##".nav-links a[href="#about"]"##)
        .expect("about link missing")
        .click()
        .expect("click failed");

    wait_until(
        &tab,
        r#"parseFloat(getComputedStyle(document.querySelector('.skill-bar')).width) > 0"#,
        Duration::from_secs(10),
        "the skill bars to fill",
    );
}

#[test]
#[ignore]
fn contact_form_is_present_with_labelled_fields() {
    let tab = load_site();

    let present = tab
        .evaluate(
            r#"(function() {
                const form = document.querySelector('.contact-form');
                if (!form) return false;
                const name = form.querySelector('input#user_name');
                const email = form.querySelector('input#user_email[type="email"]');
                const message = form.querySelector('textarea#message');
                const button = form.querySelector('button[type="submit"]');
                return Boolean(name && email && message && button && !button.disabled);
            })()"#,
            false,
        )
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");

    assert_eq!(present.as_bool(), Some(true), "contact form incomplete");
}

#[test]
#[ignore]
fn relay_success_clears_the_form_and_shows_the_note() {
    let tab = load_site();
    tab.evaluate(
        r#"window.fetch = () => Promise.resolve(new Response(null, { status: 200 }))"#,
        false,
    )
    .expect("failed to stub the relay");

    fill_contact_form(&tab);
    tab.find_element(".form-submit")
        .expect("submit button missing")
        .click()
        .expect("click failed");

    wait_for_string(
        &tab,
        r#"document.querySelector('.form-note-ok')?.textContent ?? ''"#,
        "Thank you for your message! I will get back to you soon.",
        Duration::from_secs(10),
    );
    assert!(
        eval_bool(
            &tab,
            r#"['#user_name', '#user_email', '#message']
                .every(sel => document.querySelector(sel).value === '')"#,
        ),
        "fields kept their values after a successful send"
    );
}

#[test]
#[ignore]
fn relay_failure_keeps_the_draft_and_shows_the_note() {
    let tab = load_site();
    tab.evaluate(
        r#"window.fetch = () => Promise.resolve(new Response(null, { status: 502 }))"#,
        false,
    )
    .expect("failed to stub the relay");

    fill_contact_form(&tab);
    tab.find_element(".form-submit")
        .expect("submit button missing")
        .click()
        .expect("click failed");

    wait_for_string(
        &tab,
        r#"document.querySelector('.form-note-err')?.textContent ?? ''"#,
        "There was an error sending your message. Please try again later.",
        Duration::from_secs(10),
    );
    assert!(
        eval_bool(
            &tab,
            r#"document.querySelector('#user_name').value === 'Ada Lovelace'
                && document.querySelector('#user_email').value === 'ada@example.com'
                && document.querySelector('#message').value === 'Hello from the form'"#,
        ),
        "a failed send must keep the draft for retry"
    );
}

#[test]
#[ignore]
fn double_submit_during_flight_sends_exactly_once() {
    let tab = load_site();
    tab.evaluate(
        r#"window.relayCalls = 0;
           window.fetch = () => {
               window.relayCalls += 1;
               return new Promise((resolve) =>
                   setTimeout(() => resolve(new Response(null, { status: 200 })), 1500));
           };"#,
        false,
    )
    .expect("failed to stub the relay");

    fill_contact_form(&tab);
    // Two back-to-back submits; the second lands while the first round
    // trip is still outstanding.
    tab.evaluate(
        r#"(function() {
            const form = document.querySelector('.contact-form');
            form.requestSubmit();
            form.requestSubmit();
        })()"#,
        false,
    )
    .expect("failed to submit the form");

    assert!(
        eval_bool(&tab, r#"document.querySelector('.form-submit').disabled"#),
        "submit control stayed enabled during flight"
    );

    wait_for_string(
        &tab,
        r#"document.querySelector('.form-note-ok')?.textContent ?? ''"#,
        "Thank you for your message! I will get back to you soon.",
        Duration::from_secs(10),
    );
    let calls = tab
        .evaluate("window.relayCalls", false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned");
    assert_eq!(calls.as_u64(), Some(1), "relay saw more than one dispatch");
}

#[test]
#[ignore]
fn active_nav_link_is_marked_as_the_current_page() {
    let tab = load_site();

    assert!(
        eval_bool(
            &tab,
            r##"document.querySelector('.nav-links a[href="#home"]').getAttribute('aria-current') === 'page'
                && document.querySelector('.nav-links a[href="#about"]').getAttribute('aria-current') === null"##,
        ),
        "page marker missing from the landing link"
    );

    tab.find_element(r##".nav-links a[href="#about"]"##)
        .expect("about link missing")
        .click()
        .expect("click failed");

    wait_until(
        &tab,
        r##"document.querySelector('.nav-links a[href="#about"]').getAttribute('aria-current') === 'page'
            && document.querySelector('.nav-links a[href="#home"]').getAttribute('aria-current') === null"##,
        Duration::from_secs(10),
        "the page marker to follow the active link",
    );
}
