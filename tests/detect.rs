use std::collections::HashMap;
use std::io::Write;

use raspberry_pi_info::{
    DetectionResult, FileCpuInfoSource, RaspberryPiInfo, RevisionInfo, StaticCpuInfoSource,
};

const PI5_CPUINFO: &str = "
processor   : 0
BogoMIPS    : 108.00
Features    : fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp cpuid asimdrdm lrcpc dcpop asimddp
CPU implementer : 0x41
CPU architecture: 8
CPU variant : 0x4
CPU part    : 0xd0b
CPU revision: 1

processor   : 1
BogoMIPS    : 108.00
Features    : fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp cpuid asimdrdm lrcpc dcpop asimddp
CPU implementer : 0x41
CPU architecture: 8
CPU variant : 0x4
CPU part    : 0xd0b
CPU revision: 1

processor   : 2
BogoMIPS    : 108.00
Features    : fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp cpuid asimdrdm lrcpc dcpop asimddp
CPU implementer : 0x41
CPU architecture: 8
CPU variant : 0x4
CPU part    : 0xd0b
CPU revision: 1

processor   : 3
BogoMIPS    : 108.00
Features    : fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp cpuid asimdrdm lrcpc dcpop asimddp
CPU implementer : 0x41
CPU architecture: 8
CPU variant : 0x4
CPU part    : 0xd0b
CPU revision: 1

Revision    : c04170
Serial      : d18eff6ba14f4538
Model       : Raspberry Pi 5 Model B Rev 1.0
";

const NO_REVISION_CPUINFO: &str = "
processor   : 0
BogoMIPS    : 108.00
Features    : fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp cpuid asimdrdm lrcpc dcpop asimddp
CPU implementer : 0x41
CPU architecture: 8
CPU variant : 0x4
CPU part    : 0xd0b
CPU revision: 1
";

const UNKNOWN_REVISION_CPUINFO: &str = "
processor   : 0
BogoMIPS    : 108.00
CPU revision: 1

Revision    : unknown
Serial      : d18eff6ba14f4538
Model       : Raspberry Pi 5 Model B Rev 1.0
";

fn pi(text: &str) -> RaspberryPiInfo<StaticCpuInfoSource> {
    RaspberryPiInfo::with_source(StaticCpuInfoSource::new(text))
}

fn expected(
    model: &str,
    full_name: &str,
    ram: &str,
    manufacturer: &str,
    code: &str,
) -> DetectionResult {
    DetectionResult {
        is_detected: true,
        model: Some(model.to_string()),
        full_name: Some(full_name.to_string()),
        full_name_with_ram: Some(format!("{} - {}", full_name, ram)),
        ram: Some(ram.to_string()),
        manufacturer: Some(manufacturer.to_string()),
        revision_code: Some(code.to_string()),
    }
}

#[test]
fn detects_pi5_from_cpuinfo() {
    let result = pi(PI5_CPUINFO).detect();
    assert_eq!(
        result,
        expected("5", "Raspberry Pi 5", "4GB", "Sony UK", "c04170")
    );
}

#[test]
fn custom_revision_replaces_builtin_entry() {
    let mut extra = HashMap::new();
    extra.insert("c04170".to_string(), RevisionInfo::new("0", "128GB", "Custom"));

    let result = pi(PI5_CPUINFO).with_revisions(extra).detect();
    assert_eq!(
        result,
        expected("0", "Raspberry Pi 0", "128GB", "Custom", "c04170")
    );
}

#[test]
fn custom_base_name() {
    let result = pi(PI5_CPUINFO).with_base_name("Custom RPI").detect();
    assert_eq!(
        result,
        expected("5", "Custom RPI 5", "4GB", "Sony UK", "c04170")
    );
}

#[test]
fn missing_revision_line_is_not_detected() {
    assert_eq!(pi(NO_REVISION_CPUINFO).detect(), DetectionResult::not_detected());
}

#[test]
fn unknown_revision_is_not_detected() {
    let result = pi(UNKNOWN_REVISION_CPUINFO).detect();
    assert_eq!(result, DetectionResult::not_detected());
    assert!(result.revision_code.is_none());
}

#[test]
fn missing_source_matches_missing_revision() {
    let dir = tempfile::tempdir().unwrap();
    let missing = RaspberryPiInfo::with_source(FileCpuInfoSource::with_path(dir.path().join("cpuinfo")));

    assert_eq!(missing.detect(), pi(NO_REVISION_CPUINFO).detect());
}

#[test]
fn bottom_most_revision_line_wins() {
    let text = "
processor   : 0
Revision    : a02082

processor   : 1
Revision    : a22082

Revision    : d03114
Serial      : 0000000000000000
";
    let result = pi(text).detect();
    assert_eq!(result.revision_code.as_deref(), Some("d03114"));
    assert_eq!(result.full_name_with_ram.as_deref(), Some("Raspberry Pi 4B - 8GB"));
}

#[test]
fn reads_cpuinfo_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PI5_CPUINFO.as_bytes()).unwrap();

    let pi = RaspberryPiInfo::with_source(FileCpuInfoSource::with_path(file.path()));
    assert_eq!(pi.detect().model.as_deref(), Some("5"));
}

#[test]
fn defaults_and_accessors() {
    let pi = RaspberryPiInfo::with_options(HashMap::new(), "Raspberry Pi");
    assert_eq!(pi.base_name(), "Raspberry Pi");
    assert_eq!(pi.revisions(), RaspberryPiInfo::new().revisions());
    assert_eq!(pi.source().path(), std::path::Path::new("/proc/cpuinfo"));
}

#[test]
fn serializes_with_camel_case_keys() {
    let value = serde_json::to_value(pi(PI5_CPUINFO).detect()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "isDetected": true,
            "model": "5",
            "fullName": "Raspberry Pi 5",
            "fullNameWithRam": "Raspberry Pi 5 - 4GB",
            "ram": "4GB",
            "manufacturer": "Sony UK",
            "revisionCode": "c04170",
        })
    );

    let value = serde_json::to_value(DetectionResult::not_detected()).unwrap();
    assert_eq!(value["isDetected"], false);
    assert!(value["revisionCode"].is_null());
}

#[test]
fn detector_is_shareable_across_threads() {
    let pi = std::sync::Arc::new(pi(PI5_CPUINFO));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pi = std::sync::Arc::clone(&pi);
            std::thread::spawn(move || pi.detect())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_detected);
    }
}
