//! Table generator: rebuild the reference table modules from upstream.
//!
//! Fetches the PalEdit reference dataset from its fixed GitHub path, parses
//! the `(CodeName, Name)` pairs, and overwrites the generated table
//! artifacts in full. A failed or slow fetch is fatal to the run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::cli::Table;

const SITE: &str = "github.com";
const REPO_USER: &str = "EternalWraith";
const REPO_NAME: &str = "PalEdit";
const BRANCH: &str = "main";

/// Upstream module both datasets were curated for; named in provenance headers.
const UPSTREAM_MODULE_PATH: &str = "PalInfo.py";
const PAL_TYPE_DATA_PATH: &str = "palworld_pal_edit/resources/data/pals.json";
const PAL_SKILLS_DATA_PATH: &str = "palworld_pal_edit/resources/data/passives.json";

/// Fetch timeout; a slow upstream fails the generation run.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Sentinel codes every table carries explicitly.
const SENTINELS: [(&str, &str); 2] = [("UNKNOWN", "Unknown"), ("NONE", "None")];

#[derive(Deserialize)]
struct ReferenceDoc {
    // Other top-level keys in the document are ignored
    #[serde(default)]
    values: Vec<ReferenceEntry>,
}

#[derive(Deserialize)]
struct ReferenceEntry {
    #[serde(rename = "CodeName")]
    code_name: String,
    #[serde(rename = "Name")]
    name: String,
}

/// Handle the `generate` command
pub fn handle(table: Table, out_dir: &Path) -> Result<()> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    if matches!(table, Table::PalType | Table::All) {
        let entries = fetch_entries(&agent, PAL_TYPE_DATA_PATH)?;
        let artifact = out_dir.join("pal_type.rs");
        fs::write(&artifact, render_pal_type(&entries))
            .with_context(|| format!("Failed to write {}", artifact.display()))?;
        info!("Wrote {} ({} entries)", artifact.display(), entries.len());
    }

    if matches!(table, Table::PalSkills | Table::All) {
        let entries = fetch_entries(&agent, PAL_SKILLS_DATA_PATH)?;
        let artifact = out_dir.join("pal_skills.rs");
        fs::write(&artifact, render_pal_skills(&entries))
            .with_context(|| format!("Failed to write {}", artifact.display()))?;
        info!("Wrote {} ({} entries)", artifact.display(), entries.len());
    }

    Ok(())
}

fn blob_url(path: &str) -> String {
    format!("https://{}/{}/{}/blob/{}/{}", SITE, REPO_USER, REPO_NAME, BRANCH, path)
}

fn raw_url(path: &str) -> String {
    format!("https://{}/{}/{}/raw/{}/{}", SITE, REPO_USER, REPO_NAME, BRANCH, path)
}

/// Fetch the reference document and project it into `(code, name)` pairs.
fn fetch_entries(agent: &ureq::Agent, data_path: &str) -> Result<Vec<(String, String)>> {
    let url = raw_url(data_path);
    info!("Fetching {}", url);
    let doc: ReferenceDoc = agent
        .get(&url)
        .call()
        .with_context(|| format!("Failed to fetch {}", url))?
        .into_json()
        .with_context(|| format!("Failed to parse reference document from {}", url))?;

    Ok(doc
        .values
        .into_iter()
        .map(|entry| (entry.code_name, entry.name))
        .collect())
}

fn header(title: &str, table_flag: &str, data_path: &str) -> String {
    format!(
        "//! {}\n//!\n//! Generated by `palsav generate --table {}`. Do not edit by hand.\n//!\n//! Data sources:\n//! - {}\n//! - {}\n\nuse phf::phf_map;\nuse tracing::warn;\n\n",
        title,
        table_flag,
        blob_url(UPSTREAM_MODULE_PATH),
        blob_url(data_path),
    )
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Append map entries, sentinels first, skipping duplicate keys.
fn push_entries(out: &mut String, entries: &[(String, String)], uppercase_keys: bool) {
    let mut seen: Vec<String> = Vec::new();
    let sentinels = SENTINELS
        .iter()
        .map(|(code, name)| ((*code).to_string(), (*name).to_string()));
    let projected = entries.iter().map(|(code, name)| {
        let key = if uppercase_keys {
            code.to_uppercase()
        } else {
            code.clone()
        };
        (key, name.clone())
    });

    for (key, name) in sentinels.chain(projected) {
        if seen.contains(&key) {
            continue;
        }
        out.push_str(&format!("    \"{}\" => \"{}\",\n", escape(&key), escape(&name)));
        seen.push(key);
    }
}

/// Render the full `pal_type.rs` artifact.
fn render_pal_type(entries: &[(String, String)]) -> String {
    let mut out = header(
        "Creature type display names, keyed by uppercased internal code name.",
        "pal-type",
        PAL_TYPE_DATA_PATH,
    );
    out.push_str("/// Uppercased internal code name -> display name.\n");
    out.push_str("pub static PAL_TYPES: phf::Map<&'static str, &'static str> = phf_map! {\n");
    push_entries(&mut out, entries, true);
    out.push_str("};\n");
    out.push_str(
        r#"
/// Case-insensitive lookup with raw-name fallback.
///
/// `code_upper` must already be uppercased (and boss-prefix stripped);
/// `raw_name` is the untouched upstream code returned on a miss.
pub fn resolve(code_upper: &str, raw_name: &str) -> String {
    match PAL_TYPES.get(code_upper) {
        Some(name) => (*name).to_string(),
        None => {
            warn!("pal type {} needs to be translated", raw_name);
            raw_name.to_string()
        }
    }
}
"#,
    );
    out
}

/// Render the full `pal_skills.rs` artifact.
fn render_pal_skills(entries: &[(String, String)]) -> String {
    let mut out = header(
        "Passive skill display names, keyed by internal code name.",
        "pal-skills",
        PAL_SKILLS_DATA_PATH,
    );
    out.push_str("/// Internal skill code -> display name. Codes match exactly (case-sensitive).\n");
    out.push_str("pub static PAL_SKILLS: phf::Map<&'static str, &'static str> = phf_map! {\n");
    push_entries(&mut out, entries, false);
    out.push_str("};\n");
    out.push_str(
        r#"
/// Exact-match lookup with raw-code fallback.
pub fn resolve(code: &str) -> String {
    match PAL_SKILLS.get(code) {
        Some(name) => (*name).to_string(),
        None => {
            warn!("pal skill {} needs to be translated", code);
            code.to_string()
        }
    }
}
"#,
    );
    out
}
