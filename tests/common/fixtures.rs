//! Static datasets used across harnesses.

use std::path::{Path, PathBuf};

/// A small dataset in the server's XML format. Contains fields the loader
/// must ignore (guid, company, email).
pub const DATASET_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<root>
  <row>
    <id>0</id>
    <guid>1a6fa827-62f1-45f6-b579-aaead2b47169</guid>
    <age>22</age>
    <first_name>Boyd</first_name>
    <last_name>Wolf</last_name>
    <gender>male</gender>
    <company>HOPELI</company>
    <about>Nulla cillum enim voluptate consequat laborum esse excepteur.</about>
  </row>
  <row>
    <id>1</id>
    <age>21</age>
    <first_name>Hilda</first_name>
    <last_name>Mayer</last_name>
    <gender>female</gender>
    <email>hildamayer@quintity.com</email>
    <about>Sit commodo consectetur minim amet ex. Elit aute mollit fugiat.</about>
  </row>
  <row>
    <id>2</id>
    <age>22</age>
    <first_name>Brooks</first_name>
    <last_name>Aguilar</last_name>
    <gender>male</gender>
    <about>Velit ullamco est aliqua voluptate nisi do. Boyd was here.</about>
  </row>
  <row>
    <id>3</id>
    <age>36</age>
    <first_name>Everett</first_name>
    <last_name>Dillard</last_name>
    <gender>male</gender>
    <about>Aliqua deserunt ea mollit laborum anim irure.</about>
  </row>
</root>
"#;

/// Number of rows in [`DATASET_XML`].
pub const DATASET_LEN: usize = 4;

/// Write [`DATASET_XML`] into `dir` and return its path.
pub fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("dataset.xml");
    std::fs::write(&path, DATASET_XML).unwrap();
    path
}

/// The dataset shipped with the repository.
pub fn bundled_dataset() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/dataset.xml")
}
