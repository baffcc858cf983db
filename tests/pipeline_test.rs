use replay_notables::{JsonMatchDecoder, SummaryPipeline};
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_record(value: serde_json::Value) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(value.to_string().as_bytes()).unwrap();
    temp
}

#[tokio::test]
async fn end_to_end_single_kill_match() {
    let record = write_record(json!({
        "players": [
            {"player_id": "A", "player_name": "Alice", "platform": "WIN"},
            {"player_id": "B", "player_name": "Bob", "platform": "PSN"}
        ],
        "kill_feed": [
            {"killer_id": "A", "victim_id": "B", "distance_cm": 5000.0,
             "death_tags": ["Weapon.Ranged.Shotgun.Pump", "Rarity.Rare"]}
        ]
    }));

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(record.path()).await;

    // Single kill: both sections describe the same elimination.
    for section in ["furthest", "final"] {
        assert_eq!(value[section]["distance"], 50.0);
        assert_eq!(value[section]["killer"], "Alice");
        assert_eq!(value[section]["killer_platform"], "PC");
        assert_eq!(value[section]["victim"], "Bob");
        assert_eq!(value[section]["victim_platform"], "PlayStation");
        assert_eq!(value[section]["weapon"], "Pump Shotgun");
        assert_eq!(value[section]["rarity"], "Rare");
    }
}

#[tokio::test]
async fn furthest_and_final_diverge() {
    let record = write_record(json!({
        "players": [
            {"player_id": "A", "player_name": "Alice", "platform": "WIN"},
            {"player_id": "B", "player_name": "Bob", "platform": "PSN"},
            {"player_id": "C", "player_name": "Cara", "platform": "SWT"}
        ],
        "kill_feed": [
            {"killer_id": "A", "victim_id": "B", "distance_cm": 25000.0,
             "death_tags": ["Weapon.Ranged.Sniper.Heavy", "Rarity.SuperRare"]},
            {"killer_id": "A", "victim_id": "C", "distance_cm": 800.0,
             "death_tags": ["Weapon.Ranged.SMG", "Rarity.Common"]}
        ]
    }));

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(record.path()).await;

    assert_eq!(value["furthest"]["distance"], 250.0);
    assert_eq!(value["furthest"]["weapon"], "Heavy Sniper");
    assert_eq!(value["furthest"]["rarity"], "Legendary");
    assert_eq!(value["furthest"]["victim"], "Bob");

    assert_eq!(value["final"]["distance"], 8.0);
    assert_eq!(value["final"]["weapon"], "SMG");
    assert_eq!(value["final"]["victim"], "Cara");
    assert_eq!(value["final"]["victim_platform"], "Nintendo Switch");
}

#[tokio::test]
async fn trailing_self_kill_is_not_the_final() {
    let record = write_record(json!({
        "players": [
            {"player_id": "A", "player_name": "Alice", "platform": "WIN"},
            {"player_id": "B", "player_name": "Bob", "platform": "PSN"}
        ],
        "kill_feed": [
            {"killer_id": "A", "victim_id": "B", "distance_cm": 4200.0,
             "death_tags": ["Weapon.Ranged.Assault.Standard", "Rarity.Uncommon"]},
            {"killer_id": "B", "victim_id": "B", "distance_cm": 0.0, "death_tags": []}
        ]
    }));

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(record.path()).await;

    assert_eq!(value["final"]["killer"], "Alice");
    assert_eq!(value["final"]["victim"], "Bob");
    assert_eq!(value["final"]["weapon"], "Assault Rifle");
}

#[tokio::test]
async fn sole_self_kill_falls_back_to_itself() {
    let record = write_record(json!({
        "players": [{"player_id": "A", "player_name": "Alice", "platform": "WIN"}],
        "kill_feed": [
            {"killer_id": "A", "victim_id": "A", "distance_cm": 0.0, "death_tags": []}
        ]
    }));

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(record.path()).await;

    assert_eq!(value["final"]["killer"], "Alice");
    assert_eq!(value["final"]["victim"], "Alice");
    assert_eq!(value["final"]["distance"], 0.0);
}

#[tokio::test]
async fn empty_kill_feed_yields_empty_object() {
    let record = write_record(json!({
        "players": [{"player_id": "A", "player_name": "Alice", "platform": "WIN"}],
        "kill_feed": []
    }));

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(record.path()).await;

    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn unparseable_record_yields_empty_object() {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(b"not a decoded match record").unwrap();

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(temp.path()).await;

    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn missing_file_yields_empty_object() {
    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline
        .run(Path::new("/nonexistent/path/to/match.json"))
        .await;

    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn empty_path_yields_empty_object() {
    // An empty positional argument resolves to no readable record and
    // must stay inside the soft-failure contract.
    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(Path::new("")).await;

    assert_eq!(value, json!({}));
}
