//! Language detection value types and sample parsing.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{BufRead, Seek, SeekFrom};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TanagerError};
use crate::stream::ObjectStream;

/// A language code with an optional prediction confidence.
///
/// Equality and hashing consider the code alone: a gold label carries no
/// confidence, and a prediction for the same language must compare equal to
/// it regardless of score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    lang: String,
    confidence: f64,
}

impl Language {
    /// Create a language with confidence 0.
    ///
    /// # Errors
    ///
    /// Returns an error when `lang` is empty.
    pub fn new<S: Into<String>>(lang: S) -> Result<Self> {
        Self::with_confidence(lang, 0.0)
    }

    /// Create a language with the given prediction confidence.
    ///
    /// # Errors
    ///
    /// Returns an error when `lang` is empty.
    pub fn with_confidence<S: Into<String>>(lang: S, confidence: f64) -> Result<Self> {
        let lang = lang.into();
        if lang.is_empty() {
            return Err(TanagerError::invalid_argument(
                "language code must not be empty",
            ));
        }
        Ok(Language { lang, confidence })
    }

    /// The language code.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The prediction confidence, 0 for gold labels.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lang.hash(state);
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.lang, self.confidence)
    }
}

/// A document paired with its language label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSample {
    language: Language,
    context: String,
}

impl LanguageSample {
    /// Pair `language` with the document text it labels.
    pub fn new<S: Into<String>>(language: Language, context: S) -> Self {
        LanguageSample {
            language,
            context: context.into(),
        }
    }

    /// The language label.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The document text.
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for LanguageSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.language.lang(), self.context)
    }
}

/// Parses `lang<TAB>document` lines from a seekable reader into
/// [`LanguageSample`]s.
///
/// One sample per line; the language code is everything before the first
/// tab. A line without a tab or with an empty language code fails the read
/// instead of being skipped, so corpus defects surface at the line that
/// caused them.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use tanager::langdetect::sample::LanguageSampleStream;
/// use tanager::stream::ObjectStream;
///
/// let data = "pob\te depois soube-se o que aconteceu\nspa\tfue una buena noticia\n";
/// let mut stream = LanguageSampleStream::new(Cursor::new(data));
/// let sample = stream.read().unwrap().unwrap();
/// assert_eq!(sample.language().lang(), "pob");
/// ```
pub struct LanguageSampleStream<R: BufRead + Seek> {
    reader: R,
    line: u64,
}

impl<R: BufRead + Seek> LanguageSampleStream<R> {
    /// Stream samples from `reader`.
    pub fn new(reader: R) -> Self {
        LanguageSampleStream { reader, line: 0 }
    }

    fn parse(&self, line: &str) -> Result<LanguageSample> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        match line.split_once('\t') {
            Some((lang, context)) => Ok(LanguageSample::new(
                Language::new(lang).map_err(|_| self.malformed(line))?,
                context,
            )),
            None => Err(self.malformed(line)),
        }
    }

    fn malformed(&self, line: &str) -> TanagerError {
        TanagerError::stream(format!(
            "line {} is not in `lang<TAB>document` format: {line:?}",
            self.line
        ))
    }
}

impl<R: BufRead + Seek> ObjectStream<LanguageSample> for LanguageSampleStream<R> {
    fn read(&mut self) -> Result<Option<LanguageSample>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        self.parse(&line).map(Some)
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line = 0;
        Ok(())
    }
}
