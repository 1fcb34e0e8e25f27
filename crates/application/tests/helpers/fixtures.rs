#![allow(dead_code)]

use geowrr_domain::{RegionZones, SiteMap, SiteRecord, ZoneEntry, ZoneMap};

/// `{default: as, US: {default: ny, CA: sv}, HR: eu}`
pub fn sample_zones() -> ZoneMap {
    ZoneMap::new("as")
        .with_country(
            "US",
            ZoneEntry::Nested(RegionZones::new("ny").with_region("CA", "sv")),
        )
        .with_country("HR", ZoneEntry::Leaf("eu".to_string()))
}

pub fn sample_sites() -> SiteMap {
    SiteMap::new()
        .with_record(
            "www.example.com",
            "IN",
            "A",
            SiteRecord::new(300)
                .with_zone("default", [("0.0.0.1", 100)])
                .with_zone("eu", [("0.0.0.2", 100)]),
        )
        .with_record(
            "*.example.com",
            "IN",
            "A",
            SiteRecord::default()
                .with_zone("default", [("0.0.0.3", 100)])
                .with_zone("eu", [("0.0.0.4", 100)]),
        )
        .with_record(
            "www.wrr.com",
            "IN",
            "A",
            SiteRecord::new(300)
                .with_zone("default", [("0.0.0.1", 50), ("0.0.0.2", 50)])
                .with_zone(
                    "eu",
                    [("0.0.0.1", 25), ("0.0.0.2", 25), ("0.0.0.3", 25), ("0.0.0.4", 25)],
                ),
        )
        .with_record(
            "mail.example.net",
            "IN",
            "MX",
            SiteRecord::new(600).with_zone("default", [("10 mx1.example.net", 1)]),
        )
        .with_record(
            "mail.example.net",
            "IN",
            "A",
            SiteRecord::new(60).with_zone("default", [("0.0.0.9", 1)]),
        )
}
