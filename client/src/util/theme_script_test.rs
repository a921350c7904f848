use super::*;
use crate::util::theme::{DARK_TOKENS, LIGHT_TOKENS};

#[test]
fn gate_style_hides_until_visible() {
    assert_eq!(gate_style(), "html:not(.visible){visibility:hidden}");
}

#[test]
fn bootstrap_reads_theme_key_and_os_query() {
    let script = bootstrap_script();
    assert!(script.contains("localStorage.getItem(\"theme\")"));
    assert!(script.contains("matchMedia(\"(prefers-color-scheme: dark)\")"));
    assert!(script.contains("s===\"dark\""));
}

#[test]
fn bootstrap_carries_every_token() {
    let script = bootstrap_script();
    for (name, value) in DARK_TOKENS.vars().into_iter().chain(LIGHT_TOKENS.vars()) {
        assert!(script.contains(&format!("\"{name}\":\"{value}\"")), "missing {name}={value}");
    }
}

#[test]
fn bootstrap_guards_storage_and_reveals_after_apply() {
    let script = bootstrap_script();
    assert!(script.contains("try{s=window.localStorage"));
    let apply_at = script.find("d.classList.add(t)").unwrap();
    let reveal_at = script.find("d.classList.add(\"visible\")").unwrap();
    assert!(apply_at < reveal_at);
    assert!(script.starts_with("(function(){"));
    assert!(script.ends_with("})();"));
}

#[test]
fn bootstrap_has_balanced_braces() {
    let script = bootstrap_script();
    let opens = script.matches('{').count();
    let closes = script.matches('}').count();
    assert_eq!(opens, closes);
}

/// Byte ranges of each `try{...}` body, with the index just past its closing brace.
fn try_blocks(script: &str) -> Vec<(usize, usize)> {
    let bytes = script.as_bytes();
    script
        .match_indices("try{")
        .map(|(start, _)| {
            let mut depth = 0usize;
            let mut end = start;
            for (i, &b) in bytes.iter().enumerate().skip(start + 3) {
                match b {
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            end = i + 1;
                            break;
                        }
                    }
                    _ => {}
                }
            }
            (start, end)
        })
        .collect()
}

fn inside_any(blocks: &[(usize, usize)], at: usize) -> bool {
    blocks.iter().any(|&(start, end)| start <= at && at < end)
}

#[test]
fn bootstrap_wraps_each_lookup_in_its_own_swallowing_catch() {
    let script = bootstrap_script();
    let blocks = try_blocks(&script);
    assert_eq!(blocks.len(), 2);
    for &(_, end) in &blocks {
        assert!(script[end..].starts_with("catch(e){}"), "try at {end} lacks an empty catch");
    }

    let storage_at = script.find("localStorage.getItem").unwrap();
    let media_at = script.find("window.matchMedia(").unwrap();
    assert!(blocks[0].0 < storage_at && storage_at < blocks[0].1);
    assert!(blocks[1].0 < media_at && media_at < blocks[1].1);
}

#[test]
fn bootstrap_guards_missing_match_media_before_calling_it() {
    let script = bootstrap_script();
    let guard_at = script.find("window.matchMedia&&").unwrap();
    let call_at = script.find("window.matchMedia(").unwrap();
    assert!(guard_at < call_at);
    // Without matchMedia and without a stored value the flag stays light.
    assert!(script.contains("k=false"));
}

#[test]
fn bootstrap_apply_and_reveal_run_outside_every_try() {
    let script = bootstrap_script();
    let blocks = try_blocks(&script);
    let last_catch_end = blocks.iter().map(|&(_, end)| end + "catch(e){}".len()).max().unwrap();

    for needle in [
        "d.classList.add(t)",
        "d.style.setProperty",
        "d.classList.add(\"visible\")",
        "if(window.requestAnimationFrame)",
        "else{r()}",
    ] {
        let at = script.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
        assert!(!inside_any(&blocks, at), "{needle} is inside a try block");
        assert!(at > last_catch_end, "{needle} runs before the lookups finish");
    }
}
