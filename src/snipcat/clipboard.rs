use crate::error::{CatalogError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text).or_else(|first| {
            log::debug!("event=clipboard_fallback reason={}", first);
            pipe_to("xsel", &["--clipboard", "--input"], text).map_err(|e| {
                CatalogError::Api(format!("{}. Install xclip or xsel.", e))
            })
        })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(CatalogError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

// Spawns `program`, writes `text` to its stdin and waits for it to exit.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CatalogError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    // stdin is closed at the end of the match, before the child is reaped
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child
        .wait()
        .map_err(|e| CatalogError::Api(format!("Failed to wait for {}: {}", program, e)))?;
    written.map_err(|e| CatalogError::Api(format!("Failed to write to {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CatalogError::Api(format!("{} exited with error", program)))
    }
}

/// Formats an item for the clipboard as title, blank line, content.
pub fn format_for_clipboard(title: &str, content: &str) -> String {
    format!("{}\n\n{}", title, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_clipboard_with_content() {
        let result = format_for_clipboard("My Title", "Some content");
        assert_eq!(result, "My Title\n\nSome content");
    }

    #[test]
    fn test_format_for_clipboard_empty_content() {
        let result = format_for_clipboard("My Title", "");
        assert_eq!(result, "My Title\n\n");
    }

    #[test]
    fn missing_program_is_an_api_error() {
        let err = pipe_to("snipcat-no-such-clipboard-tool", &[], "hi").unwrap_err();

        assert!(matches!(err, CatalogError::Api(ref m) if m.contains("Failed to spawn")));
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_reported() {
        let err = pipe_to("false", &[], "").unwrap_err();

        assert!(err.to_string().contains("false exited with error"));
    }

    #[cfg(unix)]
    #[test]
    fn write_failure_still_reaps_the_program() {
        // `true` exits without reading, so a payload larger than the pipe
        // buffer fails with a broken pipe
        let text = "x".repeat(4 * 1024 * 1024);

        let err = pipe_to("true", &[], &text).unwrap_err();

        assert!(
            matches!(err, CatalogError::Api(ref m) if m.contains("Failed to write to true"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn successful_program_is_ok() {
        assert!(pipe_to("true", &[], "").is_ok());
    }
}
