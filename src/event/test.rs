use super::{Domain, EventSpec, Hardware, Software, FULL_SET};

#[test]
fn test_from_hardware() {
    let spec = EventSpec::from(Hardware::Instr);
    assert_eq!(spec, EventSpec::new(1, Domain::Hardware));

    let spec = EventSpec::from(&Hardware::CpuCycle);
    assert_eq!(spec, EventSpec::new(0, Domain::Hardware));
}

#[test]
fn test_from_software() {
    let spec = EventSpec::from(Software::CtxSwitch);
    assert_eq!(spec, EventSpec::new(3, Domain::Software));

    let spec = EventSpec::from(Software::MajorPageFault);
    assert_eq!(spec, EventSpec::new(6, Domain::Software));
}

#[test]
fn test_domain_as_type() {
    assert_eq!(Domain::Hardware.as_type(), 0);
    assert_eq!(Domain::Software.as_type(), 1);
}

#[test]
fn test_full_set() {
    assert_eq!(FULL_SET.len(), 18);
    assert_eq!(FULL_SET[0], EventSpec::from(Hardware::CpuCycle));
    assert_eq!(FULL_SET[1], EventSpec::from(Hardware::Instr));
    assert_eq!(FULL_SET[8], EventSpec::from(Hardware::BackendStalledCycle));
    assert_eq!(FULL_SET[9], EventSpec::from(Software::CpuClock));
    assert_eq!(FULL_SET[17], EventSpec::from(Software::EmuFault));

    let hw = FULL_SET.iter().filter(|it| it.domain == Domain::Hardware);
    assert_eq!(hw.count(), 9);
}

#[test]
fn test_display() {
    assert_eq!(EventSpec::from(Hardware::Instr).to_string(), "hw:0x1");
    assert_eq!(EventSpec::from(Software::EmuFault).to_string(), "sw:0x8");
}
