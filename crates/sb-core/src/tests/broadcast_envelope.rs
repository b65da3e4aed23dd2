use crate::{BroadcastEnvelope, DISCRIMINATOR_FIELD, Record, SourceKind};

use serde_json::json;

#[test]
fn given_record_when_to_wire_then_all_fields_preserved_and_discriminator_added() {
    let rec = Record::from_value(json!({"time": 1000, "total": 42.5, "sku": "A-1"})).unwrap();
    let envelope = BroadcastEnvelope::new(SourceKind::Ecommerce, rec.clone());

    let wire = envelope.to_wire().unwrap();
    let decoded = Record::from_slice(wire.as_bytes()).unwrap();

    for (field, value) in rec.fields() {
        assert_eq!(decoded.get(field), Some(value), "field '{field}' altered");
    }
    assert_eq!(decoded.get(DISCRIMINATOR_FIELD), Some(&json!("ecommerce")));
    assert_eq!(decoded.len(), rec.len() + 1);
}

#[test]
fn given_weight_source_when_to_wire_then_weight_discriminator() {
    let rec = Record::from_value(json!({"time": 2000, "weight": 80.2})).unwrap();
    let envelope = BroadcastEnvelope::new(SourceKind::Weight, rec);

    let decoded = Record::from_slice(envelope.to_wire().unwrap().as_bytes()).unwrap();
    assert_eq!(decoded.get(DISCRIMINATOR_FIELD), Some(&json!("weight")));
}

#[test]
fn given_envelope_when_to_wire_then_source_record_unchanged() {
    let rec = Record::from_value(json!({"time": 1000})).unwrap();
    let envelope = BroadcastEnvelope::new(SourceKind::Ecommerce, rec);

    let _ = envelope.to_wire().unwrap();

    // The envelope serializes a tagged copy; the wrapped record keeps
    // its original shape.
    assert_eq!(envelope.record().len(), 1);
    assert!(envelope.record().get(DISCRIMINATOR_FIELD).is_none());
}
