use super::common::candidate_block;
use crate::workflows::screening::parser::{parse_records, split_lines};

#[test]
fn closes_a_record_once_all_five_keys_are_present() {
    let text = format!("{}{}", candidate_block("Ana Ruiz", "2"), candidate_block("Ben Ode", "4"));

    let records = parse_records(&text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Ana Ruiz");
    assert_eq!(records[0].tools, "Excel, Tableau");
    assert_eq!(records[1].name, "Ben Ode");
    assert_eq!(records[1].years_experience, "4");
}

#[test]
fn repeated_key_overwrites_instead_of_closing_early() {
    let text = "NAME: First\nNAME: Second\nROLE: Analyst\nSKILLS: SQL\nYEARS_EXPERIENCE: 3\nTOOLS: Excel\n";

    let records = parse_records(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Second");
}

#[test]
fn trailing_partial_block_is_discarded() {
    let text = format!("{}NAME: Orphan\nROLE: Analyst\n", candidate_block("Ana Ruiz", "2"));

    let records = parse_records(&text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Ana Ruiz");
}

#[test]
fn ignores_prose_unknown_keys_and_blank_lines() {
    let text = "Here are the candidates you asked for.\n\n  name :  Ana Ruiz  \nLOCATION: Remote\nROLE: Analyst\nSKILLS: SQL\n\nYEARS_EXPERIENCE: 3\nTOOLS: Excel: pivot tables\nThanks!";

    let records = parse_records(text);

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Ana Ruiz");
    assert_eq!(record.role, "Analyst");
    assert_eq!(record.tools, "Excel: pivot tables");
}

#[test]
fn text_without_candidates_yields_nothing() {
    assert!(parse_records("").is_empty());
    assert!(parse_records("no structured data here\nstill nothing").is_empty());
}

#[test]
fn carriage_return_only_text_still_separates_fields() {
    let records = parse_records("NAME: A\rROLE: B\rSKILLS: C\rYEARS_EXPERIENCE: 1\rTOOLS: X\r");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "A");
    assert_eq!(records[0].tools, "X");
}

#[test]
fn unicode_line_separators_split_fields() {
    let text = "NAME: A\u{2028}ROLE: B\u{85}SKILLS: C\x0cYEARS_EXPERIENCE: 1\x0bTOOLS: X\u{2029}";

    let records = parse_records(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].role, "B");
    assert_eq!(records[0].years_experience, "1");
}

#[test]
fn line_splitting_treats_crlf_as_a_single_break() {
    assert_eq!(split_lines("a\r\nb\rc\n").collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(split_lines("a\n\r\nb").collect::<Vec<_>>(), vec!["a", "", "b"]);
    assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
    assert_eq!(split_lines("").count(), 0);
}
