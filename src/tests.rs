use rand::Rng as _;

use crate::*;

// cspell:disable
const FIXTURE_ULID: &str = "01HDGX93NBW6AY9C60GH2TWDP4";
// cspell:enable
const FIXTURE_UUID: &str = "018B61D4-8EAB-E195-E4B0-C08445AE36C4";

#[test]
fn test_sizeof() {
    assert_eq!(size_of::<Ulid>(), size_of::<u128>());
}

#[test]
const fn test_send_sync() {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}

    assert_send::<Ulid>();
    assert_sync::<Ulid>();

    assert_send::<Factory>();
}

#[test]
fn test_generate_shapes() {
    let ulid = generate(None).unwrap();
    assert_eq!(ulid.len(), 26);
    assert!(is_valid_ulid(&ulid));

    let uuid = generate_uuid(None).unwrap();
    assert_eq!(uuid.len(), 36);
    assert_eq!(Format::detect(&uuid), Some(Format::Uuid));
    assert!(uuid.bytes().all(|b| b == b'-' || b.is_ascii_digit() || b.is_ascii_uppercase()));
}

#[test]
fn test_generate_timestamp_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let ts = rng.gen_range(0..=TIMESTAMP_MAX);
        assert_eq!(extract_timestamp(&generate(Some(ts)).unwrap()), Ok(ts));
        assert_eq!(extract_timestamp(&generate_uuid(Some(ts)).unwrap()), Ok(ts));
    }
}

#[test]
fn test_generate_payload_constraints() {
    for _ in 0..100 {
        let payload = extract_payload(&generate(Some(0)).unwrap()).unwrap();
        assert!((DATA_MIN..=DATA_MAX).contains(&payload));

        let uuid = generate_uuid(Some(0)).unwrap();
        // 8-4-4-4-12 grouping: version nibble opens the third group,
        // variant nibble the fourth
        assert_eq!(uuid.as_bytes()[14], b'4');
        assert!(matches!(uuid.as_bytes()[19], b'8'..=b'9' | b'A'..=b'F'));
    }
}

#[test]
fn test_generate_timestamp_boundary() {
    assert!(generate(Some(281_474_976_710_655)).is_ok());
    assert_eq!(
        generate(Some(281_474_976_710_656)),
        Err(Error::TimestampOutOfRange)
    );
    assert_eq!(
        generate_uuid(Some(u64::MAX)),
        Err(Error::TimestampOutOfRange)
    );
}

#[test]
fn test_conversion_fixture() {
    assert_eq!(convert_to_uuid(FIXTURE_ULID).as_deref(), Ok(FIXTURE_UUID));
    assert_eq!(convert_to_ulid(FIXTURE_UUID).as_deref(), Ok(FIXTURE_ULID));
}

#[test]
fn test_conversion_roundtrip() {
    for _ in 0..100 {
        let u = generate(None).unwrap();
        assert_eq!(convert_to_ulid(&convert_to_uuid(&u).unwrap()).as_deref(), Ok(u.as_str()));

        let v = generate_uuid(None).unwrap();
        assert_eq!(convert_to_uuid(&convert_to_ulid(&v).unwrap()).as_deref(), Ok(v.as_str()));
    }
}

#[test]
fn test_cross_format_value_equality() {
    for _ in 0..100 {
        let u = generate(None).unwrap();
        let v = convert_to_uuid(&u).unwrap();

        assert_eq!(extract_payload(&u), extract_payload(&v));
        assert_eq!(extract_timestamp(&u), extract_timestamp(&v));
    }
}

#[test]
fn test_format_rejection() {
    assert!(!is_valid_ulid("not-an-id"));
    assert!(!is_valid_ulid(""));

    assert_eq!(extract_timestamp("not-an-id"), Err(Error::InvalidFormat));
    assert_eq!(extract_payload("not-an-id"), Err(Error::InvalidFormat));
    assert_eq!(convert_to_uuid("not-an-id"), Err(Error::InvalidFormat));
    assert_eq!(convert_to_ulid("not-an-id"), Err(Error::InvalidFormat));
}

#[test]
fn test_uuid_input_tolerance() {
    let variants = [
        "018b61d4-8eab-e195-e4b0-c08445ae36c4",
        "018B61D48EABE195E4B0C08445AE36C4",
        "{018B61D4-8EAB-E195-E4B0-C08445AE36C4}",
        "{018b61d48eabe195e4b0c08445ae36c4}",
    ];
    for v in variants {
        assert_eq!(convert_to_ulid(v).as_deref(), Ok(FIXTURE_ULID), "{v}");
    }
}

#[test]
fn test_factory_monotonicity() {
    let mut factory = Factory::with_seed(Some(1_000), None).unwrap();

    let mut previous = factory.next_ulid().unwrap().parse::<Ulid>().unwrap();
    for _ in 0..100_000 {
        let current = factory.next_ulid().unwrap().parse::<Ulid>().unwrap();

        assert!(current > previous);
        assert!(current.timestamp() >= 1_000);
        assert!(current.timestamp() <= TIMESTAMP_MAX);
        assert!((DATA_MIN..=DATA_MAX).contains(&current.payload()));

        previous = current;
    }
}

#[test]
fn test_factory_monotonic_across_renderings() {
    let mut factory = Factory::with_seed(Some(42), None).unwrap();

    let mut previous = Ulid::MIN;
    for i in 0..1000 {
        let text = if i % 2 == 0 {
            factory.next_ulid().unwrap()
        } else {
            factory.next_uuid().unwrap()
        };
        let current: Ulid = text.parse().unwrap();

        assert!(current > previous);
        previous = current;
    }
}

#[test]
fn test_factory_seed_errors() {
    assert_eq!(
        Factory::with_seed(Some(TIMESTAMP_MAX + 1), None).map(|_| ()),
        Err(Error::TimestampOutOfRange)
    );
    assert_eq!(
        Factory::with_seed(None, Some(DATA_MIN - 1)).map(|_| ()),
        Err(Error::InvalidSeed)
    );
    assert_eq!(
        Factory::with_seed(None, Some(0)).map(|_| ()),
        Err(Error::InvalidSeed)
    );
}

#[test]
fn test_ulid_type_roundtrips() {
    let id = Ulid::new();

    assert_eq!(id.to_string().parse::<Ulid>(), Ok(id));
    assert_eq!(id.to_uuid_string().parse::<Ulid>(), Ok(id));
    assert_eq!(Ulid::from_parts(id.timestamp(), id.payload()), Ok(id));
    assert_eq!(Ulid::from_bytes(id.to_bytes()), id);
    assert_eq!(Ulid::from_u128(id.to_u128()), id);
}

#[test]
fn test_ulid_from_parts_bounds() {
    assert_eq!(Ulid::from_parts(0, 0), Ok(Ulid::MIN));
    assert!(Ulid::from_parts(TIMESTAMP_MAX, (1 << 80) - 1).is_ok());

    assert_eq!(
        Ulid::from_parts(TIMESTAMP_MAX + 1, 0),
        Err(Error::TimestampOutOfRange)
    );
    assert_eq!(Ulid::from_parts(0, 1 << 80), Err(Error::InvalidSeed));
}

#[test]
fn test_ulid_ordering_follows_timestamp() {
    let earlier = Ulid::from_parts(1, (1 << 80) - 1).unwrap();
    let later = Ulid::from_parts(2, 0).unwrap();

    assert!(earlier < later);
}

#[test]
fn test_ulid_string_extremes() {
    assert_eq!(Ulid::MIN.to_string(), "00000000000000000000000000");
    assert_eq!(Ulid::MIN.to_uuid_string(), "00000000-0000-0000-0000-000000000000");

    assert_eq!(Ulid::MAX.to_string(), "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
    assert_eq!(Ulid::MAX.to_uuid_string(), "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF");
}

#[test]
fn test_ulid_debug_fmt() {
    let id: Ulid = FIXTURE_ULID.parse().unwrap();
    assert_eq!(
        format!("{id:?}"),
        format!(
            "Ulid {{ string: \"{FIXTURE_ULID}\", timestamp: 1698153402027, payload: E195E4B0C08445AE36C4 }}"
        )
    );
}

#[cfg(feature = "serde")]
mod serde_tests {
    use serde_derive::{Deserialize, Serialize};

    use crate::Ulid;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Example {
        id: Ulid,
    }

    #[test]
    fn test_serde_roundtrip() {
        let example = Example { id: Ulid::new() };

        let json = serde_json::to_string(&example).unwrap();
        assert_eq!(json, format!("{{\"id\":\"{}\"}}", example.id));

        let parsed: Example = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, example);
    }

    #[test]
    fn test_serde_accepts_uuid_form() {
        let example = Example { id: Ulid::new() };

        let json = format!("{{\"id\":\"{}\"}}", example.id.to_uuid_string());
        let parsed: Example = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, example);
    }

    #[test]
    fn test_serde_rejects_garbage() {
        assert!(serde_json::from_str::<Example>("{\"id\":\"not-an-id\"}").is_err());
    }
}
