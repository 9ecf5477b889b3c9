//! Behavioural tests for the public generator API.

use mock_producers::{CROP_VOCABULARY, ProducerGenerator, ProducerSeed, STATE_CODES};
use producer_rules::{check_land_use, is_valid_document};
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(1)]
#[case(25)]
fn generate_returns_requested_count(#[case] count: usize) {
    let producers = ProducerGenerator::from_seed(5).generate(count);
    assert_eq!(producers.len(), count);
}

#[test]
fn generate_continues_the_stream() {
    let mut batched = ProducerGenerator::from_seed(21);
    let first = batched.generate(3);
    let second = batched.generate(3);

    let whole = ProducerGenerator::from_seed(21).generate(6);
    let joined: Vec<ProducerSeed> = first.into_iter().chain(second).collect();
    assert_eq!(joined, whole);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(12_345)]
#[case(u64::MAX)]
fn every_seed_yields_registrable_records(#[case] seed: u64) {
    for producer in ProducerGenerator::from_seed(seed).generate(50) {
        assert!(is_valid_document(&producer.document_number));
        assert!(
            check_land_use(
                producer.total_area,
                producer.farmable_area,
                producer.vegetation_area
            )
            .is_ok()
        );
        assert!(STATE_CODES.contains(&producer.state.as_str()));
        assert!(!producer.crops.is_empty());
        assert!(
            producer
                .crops
                .iter()
                .all(|crop| CROP_VOCABULARY.contains(&crop.as_str()))
        );
    }
}

#[test]
fn seeds_serialise_with_camel_case_keys() {
    let producer = ProducerGenerator::from_seed(8).next_producer();
    let json = serde_json::to_value(&producer).expect("serialise producer");

    for key in [
        "documentNumber",
        "producerName",
        "farmName",
        "city",
        "state",
        "totalArea",
        "farmableArea",
        "vegetationArea",
        "crops",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn entropy_generators_produce_valid_records() {
    let producer = ProducerGenerator::from_entropy().next_producer();
    assert!(is_valid_document(&producer.document_number));
}
