use crate::types::StorageContext;
use std::path::Path;
use tempfile::NamedTempFile;
use ulid::Ulid;

#[derive(Debug)]
pub enum Error {
    UploadFailed,
    DeleteFailed,
}

/// Builds a unique name for an uploaded file: a fresh ulid, suffixed with
/// the client-supplied file name reduced to its final path component.
pub fn generate_file_name(original_name: Option<&str>) -> String {
    let id = Ulid::new().to_string();

    match original_name
        .map(Path::new)
        .and_then(|name| name.file_name())
        .and_then(|name| name.to_str())
    {
        Some(name) => format!("{}-{}", id, name),
        None => id,
    }
}

/// Persists a streamed upload into the uploads directory and returns the
/// generated file name. The temp file was filled by the multipart layer in
/// a single pass, so this is a rename on the happy path.
pub fn store(
    cfg: &StorageContext,
    contents: NamedTempFile,
    original_name: Option<&str>,
) -> Result<String, Error> {
    std::fs::create_dir_all(&cfg.uploads_dir).map_err(|err| {
        tracing::error!("Failed to create the uploads directory: {}", err);
        Error::UploadFailed
    })?;

    let file_name = generate_file_name(original_name);

    contents
        .persist(cfg.uploads_dir.join(&file_name))
        .map_err(|err| {
            tracing::error!("Failed to save uploaded file: {:?}", err);
            Error::UploadFailed
        })
        .map(|_| file_name)
}

pub fn remove(cfg: &StorageContext, file_name: &str) -> Result<(), Error> {
    match std::fs::remove_file(cfg.uploads_dir.join(file_name)) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            tracing::error!("Failed to delete stored file {}: {}", file_name, err);
            Err(Error::DeleteFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn generated_names_are_unique() {
        let a = generate_file_name(Some("burger.png"));
        let b = generate_file_name(Some("burger.png"));

        assert_ne!(a, b);
        assert!(a.ends_with("-burger.png"));
    }

    #[test]
    fn generated_names_drop_directory_components() {
        let name = generate_file_name(Some("../../etc/passwd"));

        assert!(name.ends_with("-passwd"));
        assert!(!name.contains('/'));
    }

    #[test]
    fn generated_names_without_an_original_are_bare_ids() {
        let name = generate_file_name(None);

        assert!(!name.contains('-'));
    }

    #[test]
    fn store_persists_into_the_uploads_dir_and_remove_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = StorageContext {
            uploads_dir: dir.path().join("uploads"),
        };

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"image bytes").unwrap();

        let name = store(&cfg, file, Some("cover.jpg")).unwrap();
        let stored = cfg.uploads_dir.join(&name);

        assert_eq!(std::fs::read(&stored).unwrap(), b"image bytes");

        remove(&cfg, &name).unwrap();
        assert!(!stored.exists());

        // deleting a missing file is not an error
        remove(&cfg, &name).unwrap();
    }
}
