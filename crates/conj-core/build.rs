fn main() {
    // Validate embedded data files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_rules_header("src/rules/conjo.tsv", include_str!("src/rules/conjo.tsv"));
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_rules_header(path: &str, content: &str) {
    let header = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'));
    match header {
        Some("pos\tconj\tneg\tfml\tonum\tstem\tokuri\teuphr\teuphk") => {}
        _ => panic!("{path} must start with the 9-column rule header"),
    }
}
