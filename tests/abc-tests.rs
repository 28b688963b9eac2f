extern crate regex;
use regex::{CaptureMatches, RegexBuilder};
use std::cmp::Ordering;

fn are_captures_sorted(matches: CaptureMatches, context: &str) -> Result<(), String> {
    let mut prev_string = "";
    for cap in matches {
        let capstring = cap.get(1).unwrap().as_str();
        match prev_string.cmp(capstring) {
            Ordering::Greater => return Err(format!("{} is not sorted in {}", &capstring, &context)),
            _ => {
                prev_string = capstring;
            }
        };
    }
    Ok(())
}

#[test]
fn test_readme() -> Result<(), String> {
    let readme = std::fs::read_to_string("README.md").unwrap();
    let blocksre = RegexBuilder::new(r"^The default features are:\r?\n((?:^.+?\r?\n)*)")
        .multi_line(true)
        .build()
        .unwrap();
    let linesre = RegexBuilder::new(r"^\* (\w+)").multi_line(true).build().unwrap();
    let blocks = blocksre.captures(&readme).unwrap();
    are_captures_sorted(
        linesre.captures_iter(blocks.get(1).unwrap().as_str()),
        "README.md default features",
    )
}

#[test]
fn test_readme_additional() -> Result<(), String> {
    let readme = std::fs::read_to_string("README.md").unwrap();
    let blocksre = RegexBuilder::new(r"^Additional features are:\r?\n((?:^.+?\r?\n)*)")
        .multi_line(true)
        .build()
        .unwrap();
    let linesre = RegexBuilder::new(r"^\* (\w+)").multi_line(true).build().unwrap();
    let blocks = blocksre.captures(&readme).unwrap();
    are_captures_sorted(
        linesre.captures_iter(blocks.get(1).unwrap().as_str()),
        "README.md additional features",
    )
}

#[test]
fn test_librs() -> Result<(), String> {
    let librs = std::fs::read_to_string("src/lib.rs").unwrap();
    let modsre = RegexBuilder::new(r"^pub mod (.+?);$").multi_line(true).build().unwrap();
    are_captures_sorted(modsre.captures_iter(&librs), "lib.rs")
}

#[test]
fn test_cargotoml() -> Result<(), String> {
    let cargotoml = std::fs::read_to_string("Cargo.toml").unwrap();
    let blocksre = RegexBuilder::new(r"^# default features\r?\n((?:^.+?\r?\n)*)")
        .multi_line(true)
        .build()
        .unwrap();
    let linesre = RegexBuilder::new(r"^(\w+) = ").multi_line(true).build().unwrap();
    let blocks = blocksre.captures(&cargotoml).unwrap();
    are_captures_sorted(
        linesre.captures_iter(blocks.get(1).unwrap().as_str()),
        "Cargo.toml default features",
    )
}

#[test]
fn test_readme_lists_every_feature() {
    let readme = std::fs::read_to_string("README.md").unwrap();
    let cargotoml = std::fs::read_to_string("Cargo.toml").unwrap();
    let namesre = RegexBuilder::new(r"^(\w+) = ").multi_line(true).build().unwrap();
    for heading in ["# default features", "# additional features"] {
        let featuresre = RegexBuilder::new(&format!(r"^{heading}\r?\n((?:^.+?\r?\n)*)"))
            .multi_line(true)
            .build()
            .unwrap();
        let block = featuresre.captures(&cargotoml).unwrap();
        for cap in namesre.captures_iter(block.get(1).unwrap().as_str()) {
            let name = &cap[1];
            assert!(
                readme.contains(&format!("* {name}:")),
                "feature {name} is not described in README.md"
            );
        }
    }
}
