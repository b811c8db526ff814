//! Constructs one message per plate event type and prints them.
//!
//! Run with: cargo run -p lighthouse-events --example construct_events

use lighthouse_core::{InMemoryGateway, SampleRef};
use lighthouse_events::{construct_message, EventConfig, PlateEventParams, PlateEventType};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let gateway = InMemoryGateway::default()
        .with_robot("BKRB0001", "082effc3-f769-4e83-9073-dc7aacd5f71b")
        .with_source_plate("DS000050001", "a7a3f5c8-6d2f-4b1a-9e11-4bb4f1c2d001")
        .with_samples(
            "a7a3f5c8-6d2f-4b1a-9e11-4bb4f1c2d001",
            vec![SampleRef {
                root_sample_id: "MCM001".into(),
                rna_id: "DS000050001_A01".into(),
                lab_id: Some("MK".into()),
                result: "Positive".into(),
                lh_sample_uuid: Some("0a53e7b6-7ce8-4ebc-95c3-02dd64942531".into()),
            }],
        );
    let config = EventConfig::new("LH_TEST");

    let params: PlateEventParams = [
        ("barcode", "DS000050001"),
        ("user_id", "lab-user"),
        ("robot", "BKRB0001"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for event_type in PlateEventType::ALL {
        match construct_message(event_type, &params, &gateway, &config) {
            Ok(message) => println!("{}", message.to_json_pretty()?),
            Err(err) => eprintln!("{event_type}: {err}"),
        }
    }

    Ok(())
}
