// SPDX-License-Identifier: MIT

use serde::Serialize;

/// Runs shorter than this are noise, not labels.
pub const MIN_RUN_LEN: usize = 4;

/// Printable ASCII, space through tilde.
pub fn is_printable(b: u8) -> bool {
    (0x20..0x7f).contains(&b)
}

/// A printable run that may be a label inside the file.
#[derive(Clone, Debug, Serialize)]
pub struct StringMatch {
    pub offset: usize,
    pub text: String,
}

/// Collect candidate label strings.
///
/// One forward pass with two states, idle and in-run. A non-printable byte
/// or the end of the buffer closes the current run; a closed run is kept
/// when it has at least 4 characters and at least one letter, so pure
/// number or punctuation runs are dropped. Matches keep discovery order.
pub fn extract(data: &[u8]) -> Vec<StringMatch> {
    let mut matches = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &b) in data.iter().enumerate() {
        if is_printable(b) {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start.take() {
            retain_run(data, start, i, &mut matches);
        }
    }
    if let Some(start) = run_start {
        retain_run(data, start, data.len(), &mut matches);
    }

    tracing::debug!("{} candidate strings retained", matches.len());
    matches
}

fn retain_run(data: &[u8], start: usize, end: usize, matches: &mut Vec<StringMatch>) {
    let run = &data[start..end];
    if run.len() >= MIN_RUN_LEN && run.iter().any(u8::is_ascii_alphabetic) {
        matches.push(StringMatch {
            offset: start,
            text: String::from_utf8_lossy(run).into_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed(runs: &[(usize, &str)], len: usize) -> Vec<u8> {
        let mut data = vec![0u8; len];
        for &(at, s) in runs {
            data[at..at + s.len()].copy_from_slice(s.as_bytes());
        }
        data
    }

    #[test]
    fn keeps_runs_with_letters_of_min_length() {
        let data = embed(&[(4, "abc1")], 16);
        let found = extract(&data);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, 4);
        assert_eq!(found[0].text, "abc1");
    }

    #[test]
    fn drops_all_digit_runs() {
        let data = embed(&[(4, "1234")], 16);
        assert!(extract(&data).is_empty());
    }

    #[test]
    fn drops_three_character_runs() {
        let data = embed(&[(4, "abc")], 16);
        assert!(extract(&data).is_empty());
    }

    #[test]
    fn run_reaching_end_of_buffer_is_kept() {
        let mut data = vec![0u8; 4];
        data.extend_from_slice(b"Hotel");
        let found = extract(&data);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, 4);
        assert_eq!(found[0].text, "Hotel");
    }

    #[test]
    fn matches_preserve_discovery_order() {
        let data = embed(&[(2, "First"), (20, "Second")], 32);
        let found = extract(&data);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "First");
        assert_eq!(found[1].text, "Second");
        assert!(found[0].offset < found[1].offset);
    }

    #[test]
    fn buffer_without_labels_is_empty() {
        // 200 bytes, nothing printable for 4 in a row
        let mut data = vec![0u8; 200];
        for i in (0..200).step_by(4) {
            data[i] = b'A';
        }
        assert!(extract(&data).is_empty());
    }
}
