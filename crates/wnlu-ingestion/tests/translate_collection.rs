//! End-to-end translation of a WSC collection file into NLI examples.

use pretty_assertions::assert_eq;
use wnlu_common::config::TranslateConfig;
use wnlu_common::{NliClass, NliExample};
use wnlu_ingestion::sources::winograd::load_xml;
use wnlu_ingestion::translate::translate_file;
use wnlu_test_utils::{write_fixture, SAMPLE_WSC_XML};

#[test]
fn test_collection_file_to_jsonl() {
    let xml = write_fixture("WSCollection.xml", SAMPLE_WSC_XML);
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("wsc_nli.jsonl");

    let translation = translate_file(&xml.path, &out, &TranslateConfig::default()).unwrap();
    assert_eq!(translation.skipped, vec!["wsc-2".to_string()]);
    assert_eq!(translation.examples.len(), 4);

    let written: Vec<NliExample> = std::fs::read_to_string(&out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(written, translation.examples);

    let trophy: Vec<&NliExample> = written.iter().filter(|e| e.pair_id == "wsc-1").collect();
    assert_eq!(trophy[0].label, NliClass::Neutral);
    assert_eq!(trophy[1].label, NliClass::Entailment);
    assert_eq!(
        trophy[1].hypothesis,
        "The trophy doesn't fit into the brown suitcase because the suitcase is too small."
    );
    assert_eq!(
        trophy[1].premise,
        "The trophy doesn't fit into the brown suitcase because it is too small."
    );
}

#[test]
fn test_load_xml_keeps_unusable_schema() {
    let xml = write_fixture("WSCollection.xml", SAMPLE_WSC_XML);
    let schemata = load_xml(&xml.path).unwrap();
    assert_eq!(schemata.len(), 3);
    assert_eq!(schemata[2].correct_answer, None);
    assert_eq!(schemata[2].answers, vec!["Paul", "George"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_xml(std::path::Path::new("/nonexistent/WSCollection.xml")).unwrap_err();
    assert!(matches!(err, wnlu_common::WnluError::Io(_)));
}
