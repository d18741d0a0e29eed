//! Test-bench registry driven by the configuration generators.
//!
//! The simulation runner is an external collaborator; this module only
//! models what the generators need from it: named test benches exposing
//! test cases, and an `add_config` contract accepting a configuration name
//! plus the generic map handed to the bench when that configuration runs.

use serde::Serialize;

/// Generic map attached to a registered configuration.
///
/// Every generated configuration carries exactly one generic,
/// `encoded_tb_cfg`, but manually registered ones may set others.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Generics {
    entries: Vec<(String, String)>,
}

impl Generics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.entries.push((name.to_string(), value.to_string()));
        self
    }

    /// The single generic every bench configuration is driven by.
    pub fn encoded_tb_cfg(payload: &str) -> Self {
        Self::new().set("encoded_tb_cfg", payload)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.entries.iter()
    }
}

/// Registration contract between the generators and whatever owns the
/// configurations. Implemented by test cases (per-test configs) and by
/// benches themselves (bench-wide configs).
pub trait ConfigSink {
    fn add_config(&mut self, name: &str, generics: Generics);
}

/// A named configuration ready for the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestConfig {
    pub name: String,
    pub generics: Generics,
}

/// One test case exposed by a bench entity.
#[derive(Debug, Clone, Serialize)]
pub struct TestCase {
    name: String,
    configs: Vec<TestConfig>,
}

impl TestCase {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            configs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn configs(&self) -> &[TestConfig] {
        &self.configs
    }
}

impl ConfigSink for TestCase {
    fn add_config(&mut self, name: &str, generics: Generics) {
        tracing::debug!("test `{}`: add config `{}`", self.name, name);
        self.configs.push(TestConfig {
            name: name.to_string(),
            generics,
        });
    }
}

/// A test-bench entity and the test cases it exposes.
///
/// Test-case discovery lives with the runner; the wiring declares the
/// names as plain data.
#[derive(Debug, Clone, Serialize)]
pub struct TestBench {
    name: String,
    tests: Vec<TestCase>,
    /// bench-wide configurations, applied to every test by the runner
    configs: Vec<TestConfig>,
}

impl TestBench {
    pub fn new(name: &str, test_names: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            tests: test_names.iter().map(|n| TestCase::new(n)).collect(),
            configs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    pub fn tests_mut(&mut self) -> impl Iterator<Item = &mut TestCase> {
        self.tests.iter_mut()
    }

    pub fn configs(&self) -> &[TestConfig] {
        &self.configs
    }

    /// Total configurations the runner would execute for this bench.
    pub fn config_count(&self) -> usize {
        self.configs.len() + self.tests.iter().map(|t| t.configs.len()).sum::<usize>()
    }
}

impl ConfigSink for TestBench {
    fn add_config(&mut self, name: &str, generics: Generics) {
        tracing::debug!("bench `{}`: add config `{}`", self.name, name);
        self.configs.push(TestConfig {
            name: name.to_string(),
            generics,
        });
    }
}

/// The library of benches handed to the runner.
#[derive(Debug, Clone, Serialize)]
pub struct Library {
    name: String,
    benches: Vec<TestBench>,
}

impl Library {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            benches: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a bench and return it for configuration.
    pub fn add_test_bench(&mut self, bench: TestBench) -> &mut TestBench {
        self.benches.push(bench);
        self.benches.last_mut().unwrap()
    }

    pub fn benches(&self) -> &[TestBench] {
        &self.benches
    }

    pub fn test_bench(&self, name: &str) -> Option<&TestBench> {
        self.benches.iter().find(|b| b.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigSink, Generics, Library, TestBench};

    #[test]
    fn generics_keep_one_payload_field() {
        let generics = Generics::encoded_tb_cfg("dat_width:8,num_cycles:1");
        assert_eq!(generics.get("encoded_tb_cfg"), Some("dat_width:8,num_cycles:1"));
        assert_eq!(generics.get("missing"), None);
    }

    #[test]
    fn bench_and_test_configs_are_independent() {
        let mut bench = TestBench::new("tb_avalon_slave", &["wr single rd single"]);
        bench.add_config("sthenc_1", Generics::encoded_tb_cfg("empty"));
        for test in bench.tests_mut() {
            test.add_config("generated", Generics::encoded_tb_cfg("data_width:32"));
        }
        assert_eq!(bench.configs().len(), 1);
        assert_eq!(bench.tests()[0].configs().len(), 1);
        assert_eq!(bench.config_count(), 2);
    }

    #[test]
    fn library_lookup_by_name() {
        let mut lib = Library::new("vc_lib");
        lib.add_test_bench(TestBench::new("tb_wishbone_slave", &[]));
        assert!(lib.test_bench("tb_wishbone_slave").is_some());
        assert!(lib.test_bench("tb_axi_slave").is_none());
    }
}
