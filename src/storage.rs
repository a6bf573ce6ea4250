use std::{fs::OpenOptions, path::Path};

const DATA_DIR: &str = "data";
const DATA_FILES: [&str; 2] = ["stafflist", "serverslist"];

/// Makes sure `data/` and its list files exist under `root`.
///
/// Existing files are left untouched; their contents are not interpreted here.
pub fn ensure_data_layout(root: &Path) -> Result<(), anyhow::Error> {
    let data = root.join(DATA_DIR);
    std::fs::create_dir_all(&data)?;

    for name in DATA_FILES {
        let path = data.join(name);
        if !path.exists() {
            log::debug!("creating {}", path.display());
            OpenOptions::new().write(true).create_new(true).open(&path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_layout() {
        let dir = tempfile::tempdir().unwrap();

        ensure_data_layout(dir.path()).unwrap();

        assert!(dir.path().join("data").is_dir());
        assert!(dir.path().join("data/stafflist").is_file());
        assert!(dir.path().join("data/serverslist").is_file());
    }

    #[test]
    fn keeps_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/stafflist"), "1234\n").unwrap();

        ensure_data_layout(dir.path()).unwrap();
        ensure_data_layout(dir.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("data/stafflist")).unwrap(),
            "1234\n"
        );
        assert!(dir.path().join("data/serverslist").is_file());
    }
}
