mod helpers;

use geowrr_application::ports::GeoLocation;
use geowrr_application::use_cases::HandlePipeQueryUseCase;
use geowrr_domain::{SiteMap, SiteRecord, ZoneEntry, ZoneMap};
use helpers::{sample_sites, FixedRandom, MockGeoProvider};
use std::sync::Arc;

fn make_use_case(sites: SiteMap) -> HandlePipeQueryUseCase {
    let geo = MockGeoProvider::new().with_location("161.53.72.15", GeoLocation::country("HR"));
    let zones = ZoneMap::new("as").with_country("HR", ZoneEntry::Leaf("eu".to_string()));

    HandlePipeQueryUseCase::new(
        Arc::new(geo),
        Arc::new(zones),
        Arc::new(sites),
        Arc::new(FixedRandom::new(1)),
    )
}

#[test]
fn test_malformed_line_fails() {
    let use_case = make_use_case(sample_sites());

    assert_eq!(use_case.execute(""), "FAIL\n");
    assert_eq!(use_case.execute("Q\twww.example.com\tIN\tA\n"), "FAIL\n");
    assert_eq!(use_case.execute("AXFR\t1\n"), "FAIL\n");
}

#[test]
fn test_answer_for_default_zone() {
    let use_case = make_use_case(sample_sites());

    let reply = use_case.execute("Q\twww.example.com\tIN\tA\t1\t127.0.0.1\t127.0.0.1\t127.0.0.1");

    assert_eq!(reply, "DATA\t0\t1\twww.example.com\tIN\tA\t300\t-1\t0.0.0.1\nEND\n");
}

#[test]
fn test_answer_for_geolocated_edns_subnet() {
    let use_case = make_use_case(sample_sites());

    let reply =
        use_case.execute("Q\twww.example.com\tIN\tA\t1\t127.0.0.1\t127.0.0.1\t161.53.72.15\n");

    assert_eq!(reply, "DATA\t0\t1\twww.example.com\tIN\tA\t300\t-1\t0.0.0.2\nEND\n");
}

#[test]
fn test_answer_uses_lowercased_query_name() {
    let use_case = make_use_case(sample_sites());

    let reply = use_case.execute("Q\tTest.Example.COM\tIN\tA\t7\t127.0.0.1\t127.0.0.1\t0.0.0.0/0\n");

    assert_eq!(reply, "DATA\t0\t1\ttest.example.com\tIN\tA\t3600\t-1\t0.0.0.3\nEND\n");
}

#[test]
fn test_unknown_type_is_bare_end() {
    let use_case = make_use_case(sample_sites());

    let reply =
        use_case.execute("Q\twww.example.com\tIN\tMX\t1\t127.0.0.1\t127.0.0.1\t161.53.72.15\n");

    assert_eq!(reply, "END\n");
}

#[test]
fn test_unknown_name_is_bare_end() {
    let use_case = make_use_case(sample_sites());

    let reply = use_case.execute("Q\twww.nonexistant.org\tIN\tA\t1\t8.8.8.8\t127.0.0.1\t0.0.0.0/0\n");

    assert_eq!(reply, "END\n");
}

#[test]
fn test_any_emits_every_record_then_one_end() {
    let use_case = make_use_case(sample_sites());

    let reply = use_case.execute("Q\tmail.example.net\tIN\tANY\t1\t127.0.0.1\t127.0.0.1\t0.0.0.0/0\n");

    assert_eq!(
        reply,
        "DATA\t0\t1\tmail.example.net\tIN\tA\t60\t-1\t0.0.0.9\n\
         DATA\t0\t1\tmail.example.net\tIN\tMX\t600\t-1\t10 mx1.example.net\n\
         END\n"
    );
    assert_eq!(reply.matches("END\n").count(), 1);
}

#[test]
fn test_any_with_one_invalid_record_fails_whole_request() {
    let sites = SiteMap::new()
        .with_record(
            "mixed.example.com",
            "IN",
            "A",
            SiteRecord::default().with_zone("default", [("0.0.0.1", 1)]),
        )
        .with_record(
            "mixed.example.com",
            "IN",
            "TXT",
            SiteRecord::default().with_zone("default", [("", 1)]),
        );
    let use_case = make_use_case(sites);

    let reply = use_case.execute("Q\tmixed.example.com\tIN\tANY\t1\t127.0.0.1\t127.0.0.1\t0.0.0.0/0\n");

    assert_eq!(reply, "FAIL\n");
}

#[test]
fn test_missing_default_weight_set_fails() {
    let sites = SiteMap::new().with_record(
        "www.example.com",
        "IN",
        "A",
        SiteRecord::default().with_zone("eu", [("0.0.0.2", 1)]),
    );
    let use_case = make_use_case(sites);

    let reply = use_case.execute("Q\twww.example.com\tIN\tA\t1\t127.0.0.1\t127.0.0.1\t0.0.0.0/0\n");

    assert_eq!(reply, "FAIL\n");
}
