// Shared test helpers for building configs and resolvers.
//
// Used by several integration test files; each includes it with `mod helpers;`.

use std::path::Path;
use std::time::Duration;

use link_resolver::{Config, HttpResolver, ResolverSettings};

/// Config pointing at files inside `dir`, with no pause between requests.
#[allow(dead_code)] // Used by other test files
pub fn fast_config(dir: &Path) -> Config {
    Config {
        domains_file: dir.join("domains.txt"),
        output_file: dir.join("output.txt"),
        errors_file: dir.join("errors.txt"),
        timeout: Duration::from_secs(2),
        delay: Duration::ZERO,
        ..Default::default()
    }
}

/// Writes `lines` to the config's domains file, one per line.
#[allow(dead_code)] // Used by other test files
pub fn write_domains(config: &Config, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&config.domains_file, content).expect("Failed to write domains file");
}

/// Reads a file written by a run back into its lines.
#[allow(dead_code)] // Used by other test files
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// HTTP resolver with the default headers and the given limits.
#[allow(dead_code)] // Used by other test files
pub fn http_resolver(timeout: Duration, max_redirects: usize) -> HttpResolver {
    let settings = ResolverSettings::new("link_resolver-test/1.0", timeout, max_redirects)
        .expect("Failed to build settings");
    HttpResolver::new(settings).expect("Failed to build resolver")
}
