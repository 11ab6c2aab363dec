//! PLA (Programmable Logic Array) format support
//!
//! Reads single-output PLA files into a [`Cover`] and writes covers back. Only
//! completely specified functions are meaningful for threshold
//! identification, so the reader accepts `.type f` and `.type fr` and rejects
//! don't-care outputs.

mod error;

pub use error::{PLAError, PLAReadError, PLAWriteError};

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::cover::{Cover, CoverType, Cube, CubeType};

/// Trait for types that support PLA serialization (writing)
pub trait PLAWriter {
    /// Write this cover to PLA format using a writer
    ///
    /// This is the core serialization method that writes directly to any `Write` implementation.
    /// Both `to_pla_string` and `to_pla_file` delegate to this method.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError>;

    /// Convert this cover to a PLA format string
    fn to_pla_string(&self) -> Result<String, PLAWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| PLAWriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write this cover to a PLA file
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PLAWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl PLAWriter for Cover {
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError> {
        if self.cover_type() == CoverType::FR {
            writeln!(writer, ".type fr")?;
        }

        writeln!(writer, ".i {}", self.num_inputs())?;
        if !self.input_labels().is_empty() {
            write!(writer, ".ilb")?;
            for label in self.input_labels() {
                write!(writer, " {}", label)?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, ".o 1")?;
        if let Some(label) = self.output_label() {
            writeln!(writer, ".ob {}", label)?;
        }

        writeln!(writer, ".p {}", self.num_cubes())?;
        for cube in self.cubes() {
            let output = match cube.cube_type() {
                CubeType::F => '1',
                CubeType::R => '0',
            };
            writeln!(writer, "{} {}", cube, output)?;
        }

        match self.cover_type() {
            CoverType::F => writeln!(writer, ".e")?,
            CoverType::FR => writeln!(writer, ".end")?,
        }
        Ok(())
    }
}

/// Trait for types that support PLA deserialization (reading/parsing)
///
/// The trait provides default implementations for convenience methods that
/// delegate to the core `from_pla_reader` method.
pub trait PLAReader: Sized {
    /// Parse a cover from a PLA format reader
    fn from_pla_reader<R: io::BufRead>(reader: R) -> Result<Self, PLAReadError>;

    /// Parse a cover from a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use threshold_logic::{Cover, PLAReader};
    ///
    /// let pla = ".i 2\n.o 1\n.p 1\n11 1\n.e\n";
    /// let cover = Cover::from_pla_string(pla).unwrap();
    /// assert_eq!(cover.num_inputs(), 2);
    /// assert_eq!(cover.num_cubes(), 1);
    /// ```
    fn from_pla_string(s: &str) -> Result<Self, PLAReadError> {
        Self::from_pla_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Load a cover from a PLA format file
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PLAReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

impl PLAReader for Cover {
    fn from_pla_reader<R: io::BufRead>(reader: R) -> Result<Self, PLAReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut cover_type = CoverType::F;
        let mut input_labels: Option<Vec<Arc<str>>> = None;
        let mut output_label: Option<Arc<str>> = None;
        let mut cubes = Vec::new();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts.first().copied() {
                    Some(".i") => {
                        let val: usize =
                            parts.get(1).and_then(|s| s.parse().ok()).ok_or_else(|| {
                                PLAError::InvalidInputDirective {
                                    value: Arc::from(parts.get(1).copied().unwrap_or("")),
                                }
                            })?;
                        num_inputs = Some(val);
                    }
                    Some(".o") => {
                        let val: usize =
                            parts.get(1).and_then(|s| s.parse().ok()).ok_or_else(|| {
                                PLAError::InvalidOutputDirective {
                                    value: Arc::from(parts.get(1).copied().unwrap_or("")),
                                }
                            })?;
                        if val != 1 {
                            return Err(PLAError::UnsupportedOutputCount { count: val }.into());
                        }
                    }
                    Some(".type") => {
                        cover_type = match parts.get(1).copied() {
                            Some("f") => CoverType::F,
                            Some("fr") => CoverType::FR,
                            other => {
                                return Err(PLAError::UnsupportedType {
                                    value: Arc::from(other.unwrap_or("")),
                                }
                                .into())
                            }
                        };
                    }
                    Some(".ilb") => {
                        let labels: Vec<Arc<str>> =
                            parts.iter().skip(1).map(|s| Arc::from(*s)).collect();
                        if !labels.is_empty() {
                            input_labels = Some(labels);
                        }
                    }
                    Some(".ob") => {
                        output_label = parts.get(1).map(|s| Arc::from(*s));
                    }
                    Some(".e") | Some(".end") => break,
                    // .p and unknown directives carry nothing we need
                    _ => {}
                }
                continue;
            }

            // Some PLA files use | between inputs and outputs
            let (input_str, output_str) = match line.split_once('|') {
                Some((inp, out)) => (strip_spaces(inp), strip_spaces(out)),
                None => {
                    // The output is the last character, which may be multi-byte
                    let compact = strip_spaces(line);
                    let out_start = match compact.char_indices().next_back() {
                        Some((index, _)) if index > 0 => index,
                        _ => return Err(PLAError::MalformedCube { line: line_number }.into()),
                    };
                    let (inp, out) = compact.split_at(out_start);
                    (inp.to_string(), out.to_string())
                }
            };

            let actual_inputs = input_str.chars().count();
            let actual_outputs = output_str.chars().count();
            let ni = *num_inputs.get_or_insert(actual_inputs);
            if actual_inputs != ni || actual_outputs != 1 {
                return Err(PLAError::CubeDimensionMismatch {
                    line: line_number,
                    expected_inputs: ni,
                    actual_inputs,
                    actual_outputs,
                }
                .into());
            }

            let mut inputs = Vec::with_capacity(ni);
            for (position, ch) in input_str.chars().enumerate() {
                inputs.push(match ch {
                    '0' => Some(false),
                    '1' => Some(true),
                    '-' | '~' | 'x' | 'X' => None,
                    _ => {
                        return Err(PLAError::InvalidInputCharacter {
                            character: ch,
                            position,
                            line: line_number,
                        }
                        .into())
                    }
                });
            }

            match output_str.chars().next() {
                Some('1') | Some('4') => cubes.push(Cube::new(&inputs, CubeType::F)),
                // Kept until .type is known for the whole file
                Some('0') | Some('3') => cubes.push(Cube::new(&inputs, CubeType::R)),
                Some('~') => {}
                Some('-') | Some('2') => {
                    return Err(PLAError::DontCareOutput { line: line_number }.into())
                }
                Some(ch) => {
                    return Err(PLAError::InvalidOutputCharacter {
                        character: ch,
                        line: line_number,
                    }
                    .into())
                }
                None => return Err(PLAError::MalformedCube { line: line_number }.into()),
            }
        }

        let num_inputs = num_inputs.ok_or(PLAError::MissingInputDirective)?;

        // An unset output bit in an F-type file contributes nothing
        if !cover_type.has_r() {
            cubes.retain(|cube| cube.cube_type() == CubeType::F);
        }

        let input_labels = match input_labels {
            Some(labels) if labels.len() != num_inputs => {
                return Err(PLAError::LabelCountMismatch {
                    expected: num_inputs,
                    actual: labels.len(),
                }
                .into())
            }
            Some(labels) => labels,
            None => Vec::new(),
        };

        Ok(Cover::from_parts(
            num_inputs,
            input_labels,
            output_label,
            cubes,
            cover_type,
        ))
    }
}

fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::truth_table::TruthTable;

    #[test]
    fn test_read_simple_pla() {
        let pla = ".i 3\n.o 1\n.ilb a b c\n.ob f\n.p 2\n11- 1\n-11 1\n.e\n";
        let cover = Cover::from_pla_string(pla).unwrap();
        assert_eq!(cover.num_inputs(), 3);
        assert_eq!(cover.num_cubes(), 2);
        assert_eq!(cover.input_labels()[2].as_ref(), "c");
        assert_eq!(cover.output_label().map(|l| l.as_ref()), Some("f"));
    }

    #[test]
    fn test_dimensions_inferred_from_first_cube() {
        let cover = Cover::from_pla_string("10 1\n01 1\n").unwrap();
        assert_eq!(cover.num_inputs(), 2);
        assert_eq!(cover.num_cubes(), 2);
    }

    #[test]
    fn test_pipe_separator() {
        let cover = Cover::from_pla_string(".i 2\n.o 1\n1 1 | 1\n.e\n").unwrap();
        assert_eq!(cover.num_cubes(), 1);
        assert_eq!(cover.cubes().next().unwrap().to_string(), "11");
    }

    #[test]
    fn test_f_type_ignores_zero_outputs() {
        let cover = Cover::from_pla_string(".i 1\n.o 1\n1 1\n0 0\n.e\n").unwrap();
        assert_eq!(cover.num_cubes(), 1);
        assert_eq!(cover.offset().count(), 0);
    }

    #[test]
    fn test_fr_type_keeps_offset() {
        let pla = ".type fr\n.i 2\n.o 1\n11 1\n0- 0\n-0 0\n.end\n";
        let cover = Cover::from_pla_string(pla).unwrap();
        assert_eq!(cover.cover_type(), CoverType::FR);
        assert_eq!(cover.onset().count(), 1);
        assert_eq!(cover.offset().count(), 2);
    }

    #[test]
    fn test_rejects_multiple_outputs() {
        let err = Cover::from_pla_string(".i 2\n.o 2\n11 10\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::UnsupportedOutputCount { count: 2 })
        ));
    }

    #[test]
    fn test_rejects_dont_care_outputs() {
        let err = Cover::from_pla_string(".i 2\n.o 1\n11 1\n00 -\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::DontCareOutput { line: 4 })
        ));
    }

    #[test]
    fn test_rejects_fd_type() {
        let err = Cover::from_pla_string(".type fd\n.i 1\n.o 1\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_input_character() {
        let err = Cover::from_pla_string(".i 2\n.o 1\n1z 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::InvalidInputCharacter {
                character: 'z',
                position: 1,
                line: 3
            })
        ));
    }

    #[test]
    fn test_rejects_multibyte_output_character() {
        let err = Cover::from_pla_string(".i 2\n.o 1\n11é\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::InvalidOutputCharacter {
                character: 'é',
                line: 3
            })
        ));
    }

    #[test]
    fn test_rejects_multibyte_input_character() {
        let err = Cover::from_pla_string(".i 2\n.o 1\n1é 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::InvalidInputCharacter {
                character: 'é',
                position: 1,
                line: 3
            })
        ));
    }

    #[test]
    fn test_single_character_cube_is_malformed() {
        let err = Cover::from_pla_string(".i 1\n.o 1\né\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::MalformedCube { line: 3 })
        ));
    }

    #[test]
    fn test_late_type_directive_keeps_earlier_offset_cubes() {
        let cover = Cover::from_pla_string(".i 1\n.o 1\n1 1\n0 0\n.type fr\n.e\n").unwrap();
        assert_eq!(cover.cover_type(), CoverType::FR);
        assert_eq!(cover.offset().count(), 1);
        assert_eq!(cover.to_truth_table(), Ok(TruthTable::nth_var(1, 0)));
    }

    #[test]
    fn test_rejects_wrong_cube_width() {
        let err = Cover::from_pla_string(".i 3\n.o 1\n11 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::CubeDimensionMismatch { line: 3, .. })
        ));
    }

    #[test]
    fn test_label_count_mismatch() {
        let err = Cover::from_pla_string(".i 2\n.o 1\n.ilb a\n11 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::LabelCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_missing_dimensions() {
        let err = Cover::from_pla_string("# only a comment\n.e\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::PLA(PLAError::MissingInputDirective)
        ));
    }

    #[test]
    fn test_write_f_cover() {
        let mut cover = Cover::with_labels(CoverType::F, &["a", "b"]);
        cover.add_cube(&[Some(true), None], true);
        let text = cover.to_pla_string().unwrap();
        assert_eq!(text, ".i 2\n.ilb a b\n.o 1\n.p 1\n1- 1\n.e\n");
    }

    #[test]
    fn test_write_then_read_fr_cover() {
        let mut cover = Cover::new(CoverType::FR);
        cover.add_cube(&[Some(true), Some(true)], true);
        cover.add_cube(&[Some(false), None], false);
        cover.add_cube(&[None, Some(false)], false);

        let text = cover.to_pla_string().unwrap();
        assert!(text.starts_with(".type fr\n"));
        assert!(text.ends_with(".end\n"));

        let parsed = Cover::from_pla_string(&text).unwrap();
        assert_eq!(parsed.to_truth_table(), cover.to_truth_table());
    }
}
