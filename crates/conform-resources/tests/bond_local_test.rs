use conform_resources::{Bond, LocalFile};
use tempfile::TempDir;

const STATUS: &str = "\
Bonding Mode: fault-tolerance (active-backup)
Currently Active Slave: eth0
MII Status: up

Slave Interface: eth0
MII Status: up

Slave Interface: eth1
MII Status: down
";

#[test]
fn reads_bonding_status_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bond0");
    std::fs::write(&path, STATUS).unwrap();

    let bond = Bond::new("bond0", LocalFile::new(&path));
    assert!(bond.exists());
    assert_eq!(bond.interfaces(), vec!["eth0", "eth1"]);
    assert!(bond.has_interface("eth1"));
    assert_eq!(bond.content(), Some(STATUS));
    assert_eq!(
        bond.params().get("Currently Active Slave").unwrap().values(),
        vec!["eth0"]
    );
}

#[test]
fn missing_status_file_yields_empty_snapshot() {
    let dir = TempDir::new().unwrap();
    let bond = Bond::new("bond7", LocalFile::new(dir.path().join("bond7")));

    assert!(!bond.exists());
    assert!(bond.params().is_empty());
    assert!(bond.interfaces().is_empty());

    // Creating the file afterwards does not refresh the snapshot.
    std::fs::write(dir.path().join("bond7"), STATUS).unwrap();
    assert!(bond.params().is_empty());
}
