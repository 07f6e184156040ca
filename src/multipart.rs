//! multipart/form-data encoding for image uploads

use std::io::Write;

use crate::error::{CatApiError, Result};
use crate::params::UploadParams;

/// Content type of the file part. The API is sent `image/jpeg` whatever the
/// actual image format is.
pub(crate) const FILE_CONTENT_TYPE: &str = "image/jpeg";

/// Encoded upload body
#[derive(Debug, Clone)]
pub(crate) struct MultipartBody {
    pub bytes: Vec<u8>,
    /// `multipart/form-data; boundary=...`
    pub content_type: String,
}

pub(crate) fn encode_upload(
    file: &[u8],
    file_name: &str,
    params: &UploadParams,
) -> Result<MultipartBody> {
    let boundary = uuid::Uuid::new_v4().simple().to_string();
    encode_with_boundary(file, file_name, params, &boundary)
}

fn encode_with_boundary(
    file: &[u8],
    file_name: &str,
    params: &UploadParams,
    boundary: &str,
) -> Result<MultipartBody> {
    check_header_safe("file name", file_name)?;
    if let Some(sub_id) = &params.sub_id {
        check_header_safe("sub_id", sub_id)?;
    }
    if let Some(breed_ids) = &params.breed_ids {
        check_header_safe("breed_ids", breed_ids)?;
    }

    let mut out = Vec::with_capacity(file.len() + 512);

    write!(out, "--{}\r\n", boundary)?;
    write!(
        out,
        "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
        escape_quotes(file_name)
    )?;
    write!(out, "Content-Type: {}\r\n\r\n", FILE_CONTENT_TYPE)?;
    out.write_all(file)?;
    out.write_all(b"\r\n")?;

    if let Some(sub_id) = &params.sub_id {
        write_field(&mut out, boundary, "sub_id", sub_id)?;
    }
    if let Some(breed_ids) = &params.breed_ids {
        write_field(&mut out, boundary, "breed_ids", breed_ids)?;
    }

    write!(out, "--{}--\r\n", boundary)?;

    Ok(MultipartBody {
        bytes: out,
        content_type: format!("multipart/form-data; boundary={}", boundary),
    })
}

fn write_field(out: &mut impl Write, boundary: &str, name: &str, value: &str) -> Result<()> {
    write!(out, "--{}\r\n", boundary)?;
    write!(
        out,
        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
        name
    )?;
    write!(out, "{}\r\n", value)?;
    Ok(())
}

/// Line breaks would end a header or a field value early
fn check_header_safe(what: &str, value: &str) -> Result<()> {
    if value.contains(&['\r', '\n'][..]) {
        return Err(CatApiError::validation(format!(
            "{} must not contain line breaks",
            what
        )));
    }
    Ok(())
}

fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let params = UploadParams::new().with_sub_id("abc").with_breed_ids("xyz");
        let body = encode_with_boundary(b"JPEGDATA", "cat.jpg", &params, "XBOUNDARY").unwrap();

        let expected = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"file\"; filename=\"cat.jpg\"\r\n\
            Content-Type: image/jpeg\r\n\r\n\
            JPEGDATA\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"sub_id\"\r\n\r\n\
            abc\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"breed_ids\"\r\n\r\n\
            xyz\r\n\
            --XBOUNDARY--\r\n";

        assert_eq!(String::from_utf8(body.bytes).unwrap(), expected);
        assert_eq!(body.content_type, "multipart/form-data; boundary=XBOUNDARY");
    }

    #[test]
    fn test_encode_omits_unset_fields() {
        let body = encode_upload(b"data", "cat.png", &UploadParams::new()).unwrap();
        let text = String::from_utf8_lossy(&body.bytes);

        assert!(text.contains("filename=\"cat.png\""));
        assert!(text.contains("Content-Type: image/jpeg"));
        assert!(!text.contains("name=\"sub_id\""));
        assert!(!text.contains("name=\"breed_ids\""));
    }

    #[test]
    fn test_boundary_matches_content_type() {
        let body = encode_upload(b"data", "cat.jpg", &UploadParams::new()).unwrap();
        let boundary = body
            .content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap();
        let text = String::from_utf8_lossy(&body.bytes);

        assert!(text.starts_with(&format!("--{}\r\n", boundary)));
        assert!(text.ends_with(&format!("--{}--\r\n", boundary)));
    }

    #[test]
    fn test_line_breaks_are_rejected() {
        let params = UploadParams::new().with_sub_id("abc\r\n--XBOUNDARY--");
        let err = encode_upload(b"data", "cat.jpg", &params).unwrap_err();
        assert!(matches!(err, CatApiError::Validation { .. }));

        let params = UploadParams::new().with_breed_ids("beng\nabys");
        assert!(encode_upload(b"data", "cat.jpg", &params).is_err());

        let err = encode_upload(b"data", "cat\r\n.jpg", &UploadParams::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_filename_quotes_are_escaped() {
        let body = encode_upload(b"data", "my \"best\" cat.jpg", &UploadParams::new()).unwrap();
        let text = String::from_utf8_lossy(&body.bytes);

        assert!(text.contains(r#"filename="my \"best\" cat.jpg""#));
    }
}
