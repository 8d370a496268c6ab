
use fixtures::TestFixture;
use predicates::prelude::*;

#[test]
fn test_unknown_query_offline_shows_placeholder() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["show", "unknown", "--format", "line"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MISSINGNO. (#000)"))
        .stdout(predicate::str::contains("Weaknesses: None"));
}

#[test]
fn test_line_format_from_snapshot() {
    let fixture = TestFixture::with_snapshot("");
    let stdout = fixture.stdout(&["--source", "database", "show", "eevee", "151", "-f", "line"]);

    insta::assert_snapshot!(stdout.trim_end(), @r"
    Eevee (#133): Normal | #133 > #134 > #135 > #136 | Weaknesses: Fighting
    Mew (#151): Psychic | #151 | Weaknesses: Bug, Dark, Ghost
    ");
}

#[test]
fn test_json_format_parses_back() {
    let fixture = TestFixture::with_snapshot("");
    let stdout = fixture.stdout(&["--source", "db", "show", "Jolteon", "--format", "json"]);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["number"], 135);
    assert_eq!(parsed["name"], "Jolteon");
    assert_eq!(parsed["genus"], "Lightning");
    assert_eq!(parsed["types"], serde_json::json!(["electric"]));
    assert_eq!(parsed["chain"].as_array().map(Vec::len), Some(4));
    assert_eq!(parsed["chain"][0]["name"], "Eevee");
    assert_eq!(parsed["height"], 800);
}

#[test]
fn test_simple_format_block() {
    let fixture = TestFixture::with_snapshot("");
    let stdout = fixture.stdout(&["--source", "database", "show", "133", "--format", "simple"]);

    insta::assert_snapshot!(stdout.trim_end(), @r"
    Eevee (#133), Evolution Pokémon
    Normal, 0.30 m, 6.5 kg
    Its genetic code is irregular.
    Weaknesses: Fighting
    ----------------------------------------
    ");
}

#[test]
fn test_card_format_draws_sections() {
    let fixture = TestFixture::with_snapshot("");

    fixture
        .command()
        .args(["--source", "database", "show", "eevee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Evolution Pokémon"))
        .stdout(predicate::str::contains("Weaknesses:"))
        .stdout(predicate::str::contains("FIGHTING"))
        .stdout(predicate::str::contains("Vaporeon"));
}

#[test]
fn test_out_of_range_number_is_a_placeholder() {
    let fixture = TestFixture::with_snapshot("");
    let stdout = fixture.stdout(&["--source", "database", "show", "2000", "--format", "simple"]);

    assert!(stdout.contains("MISSINGNO. (#000), ??? Pokémon"));
    assert!(stdout.contains("Pokémon 2000 not found"));
}

#[test]
fn test_records_are_served_from_cache() {
    let fixture = TestFixture::with_snapshot("");
    fixture.stdout(&["--source", "database", "show", "mew", "--format", "line"]);
    assert!(fixture.record_path(151).exists());

    // Remote source in offline mode can only answer from the cache
    let stdout = fixture.stdout(&["--source", "remote", "show", "mew", "--format", "line"]);
    assert!(stdout.starts_with("Mew (#151): Psychic"));
}

#[test]
fn test_broken_family_fails_the_run() {
    let fixture = TestFixture::with_snapshot(
        "UPDATE pokemon_species SET evolves_from_species_id = 136 WHERE id = 133;",
    );

    fixture
        .command()
        .args(["--source", "database", "show", "eevee", "--format", "line"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: lookup of 'eevee' failed"))
        .stderr(predicate::str::contains("no root"));
}
