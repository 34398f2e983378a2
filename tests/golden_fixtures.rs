use std::path::Path;
use vulners_sbom::audit::{parse_audit_response, AuditReport};
use vulners_sbom::pipeline::load_and_extract;
use vulners_sbom::reports::{JsonReporter, ReportGenerator, SummaryReporter};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn read_fixture(relative: &str) -> String {
    std::fs::read_to_string(Path::new(FIXTURES_DIR).join(relative))
        .expect("failed to read fixture")
}

#[test]
fn golden_audit_summary_debian() {
    let sbom = load_and_extract(
        &Path::new(FIXTURES_DIR).join("cyclonedx/debian.cdx.json"),
        true,
    )
    .expect("failed to extract CycloneDX fixture");
    let data = parse_audit_response(&read_fixture("vulners/debian-audit.json"))
        .expect("failed to parse audit response fixture");
    let audit = AuditReport::new(sbom.result.os.clone(), sbom.result.packages.clone(), data);

    let report = SummaryReporter::new()
        .no_color()
        .generate_audit_report(&sbom, &audit)
        .expect("summary should render");

    let rule = "-".repeat(60);
    let expected = [
        "Operation System: debian 10".to_string(),
        "Found 2 vulnerabilities".to_string(),
        rule.clone(),
        format!("{:<40} CVEs", "Package"),
        rule,
        format!(
            "{:<40} CVE-2021-22946, CVE-2021-22947",
            "curl 7.64.0-4+deb10u2 amd64"
        ),
        format!("{:<40} CVE-2022-0778", "openssl 1.1.1d-0+deb10u7 amd64"),
    ]
    .join("\n");
    assert_eq!(report, expected);
}

#[test]
fn golden_audit_json_debian() {
    let sbom = load_and_extract(
        &Path::new(FIXTURES_DIR).join("cyclonedx/debian.cdx.json"),
        true,
    )
    .expect("failed to extract CycloneDX fixture");
    let data = parse_audit_response(&read_fixture("vulners/debian-audit.json"))
        .expect("failed to parse audit response fixture");
    let audit = AuditReport::new(sbom.result.os.clone(), sbom.result.packages.clone(), data);

    let json = JsonReporter::new()
        .generate_audit_report(&sbom, &audit)
        .expect("json should render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["format"], "cyclonedx-json");
    assert_eq!(value["os"], serde_json::json!({"name": "debian", "version": "10"}));
    assert_eq!(value["vulnerability_count"], 2);
    assert_eq!(value["cvss_score"], 7.5);
    assert_eq!(value["packages"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["reasons"][1]["package"], "openssl 1.1.1d-0+deb10u7 amd64");
}

#[test]
fn golden_audit_error_response() {
    let err = parse_audit_response(&read_fixture("vulners/error-response.json"))
        .expect_err("error envelope must not decode as success");
    let message = format!("{err}: {}", std::error::Error::source(&err).map(ToString::to_string).unwrap_or_default());
    assert!(message.contains("Wrong API key (code 103)"), "{message}");
}
