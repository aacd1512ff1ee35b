use log::debug;

// @module: Phrase-based word alignment between script and analysis streams

/// A single word in either token stream.
///
/// Analysis words carry a frame offset and a duration (milliseconds) from the
/// moment they are parsed. Script words start untimed and are populated by the
/// aligner, which copies values from matched analysis words and interpolates
/// the rest. Values are copied across streams, never aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    // @field: Normalized token text (uppercase, alphanumeric/apostrophe)
    pub text: String,

    // @field: Millisecond offset into the clip, if known
    pub frame: Option<u64>,

    // @field: Spoken duration in milliseconds, if known
    pub duration: Option<u64>,
}

impl Word {
    /// Create a script-stream word with no timing yet
    pub fn untimed<S: Into<String>>(text: S) -> Self {
        Word {
            text: text.into(),
            frame: None,
            duration: None,
        }
    }

    /// Create an analysis-stream word with known timing
    pub fn timed<S: Into<String>>(text: S, frame: u64, duration: u64) -> Self {
        Word {
            text: text.into(),
            frame: Some(frame),
            duration: Some(duration),
        }
    }
}

/// A contiguous run of identical words matched between the two streams.
/// Transient: consumed immediately by the aligner and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    /// Starting index in the script stream
    pub source_pos: usize,
    /// Starting index in the analysis stream
    pub analysis_pos: usize,
    /// Number of matching words
    pub length: usize,
}

/// Aligns the script word stream against the time-coded analysis stream.
///
/// Two phases: exact phrase matches anchor the timeline, then every maximal
/// run of still-untimed words gets a locally linear estimate between its
/// surrounding anchors.
pub struct WordAligner {
    // @field: Minimum run length for a phrase match
    min_phrase_length: usize,
}

impl WordAligner {
    // @creates: Aligner with the given minimum phrase length
    pub fn new(min_phrase_length: usize) -> Self {
        WordAligner { min_phrase_length }
    }

    /// Populate frame and duration for every script word.
    ///
    /// After this returns, each element of `script` carries `Some` frame and
    /// duration: either copied verbatim from a matched analysis word or
    /// interpolated between the nearest matched neighbours.
    pub fn align(&self, script: &mut [Word], analysis: &[Word]) {
        let phrases = self.map_phrases(script, analysis);
        debug!(
            "Matched {} phrase(s) covering {} of {} script words",
            phrases.len(),
            phrases.iter().map(|p| p.length).sum::<usize>(),
            script.len()
        );

        Self::assign_matched_positions(script, analysis, &phrases);
        Self::approximate_unmatched_positions(script);
    }

    /// Scan the script left to right collecting non-overlapping phrases.
    ///
    /// A hit consumes the whole matched run (no nested or overlapping
    /// matches); a miss advances by a single word, which may still open a
    /// later phrase if it recurs.
    fn map_phrases(&self, script: &[Word], analysis: &[Word]) -> Vec<Phrase> {
        let mut phrases = Vec::new();
        let mut pos = 0;

        while pos < script.len() {
            match Self::find_phrase(script, analysis, pos, self.min_phrase_length) {
                Some(phrase) => {
                    pos += phrase.length;
                    phrases.push(phrase);
                }
                None => pos += 1,
            }
        }

        phrases
    }

    /// Search the analysis stream for a phrase starting at `pos` in the script.
    ///
    /// Candidates are the analysis indices whose text equals the script word,
    /// tried in ascending order; each run is extended maximally, and the
    /// FIRST candidate whose run reaches `min_length` wins. First-fit by
    /// analysis position, not best-fit: a later, longer run is never
    /// preferred over an earlier qualifying one.
    fn find_phrase(
        script: &[Word],
        analysis: &[Word],
        pos: usize,
        min_length: usize,
    ) -> Option<Phrase> {
        for (i, candidate) in analysis.iter().enumerate() {
            if candidate.text != script[pos].text {
                continue;
            }

            let mut count = 0;
            while pos + count < script.len()
                && i + count < analysis.len()
                && script[pos + count].text == analysis[i + count].text
            {
                count += 1;
            }

            if count >= min_length {
                return Some(Phrase {
                    source_pos: pos,
                    analysis_pos: i,
                    length: count,
                });
            }
        }

        None
    }

    /// Copy frame and duration from the analysis words into the script words
    /// covered by each phrase, in discovery order.
    fn assign_matched_positions(script: &mut [Word], analysis: &[Word], phrases: &[Phrase]) {
        for phrase in phrases {
            for offset in 0..phrase.length {
                let from = &analysis[phrase.analysis_pos + offset];
                let to = &mut script[phrase.source_pos + offset];
                to.frame = from.frame;
                to.duration = from.duration;
            }
        }
    }

    /// Find every maximal run of words still lacking a frame and fill it with
    /// a linear estimate.
    fn approximate_unmatched_positions(script: &mut [Word]) {
        let mut pos = 0;
        while pos < script.len() {
            if script[pos].frame.is_some() {
                pos += 1;
                continue;
            }

            let mut len = 1;
            while pos + len < script.len() && script[pos + len].frame.is_none() {
                len += 1;
            }

            Self::interpolate_run(script, pos, len);
            pos += len;
        }
    }

    /// Distribute a run of `len` untimed words evenly between the bounding
    /// anchors. With no forward anchor, or anchors that fail to increase, the
    /// step degenerates to 0 and every word in the run pins to `prev_frame`.
    fn interpolate_run(script: &mut [Word], start: usize, len: usize) {
        let prev_frame = if start >= 1 {
            script[start - 1].frame.unwrap_or(0)
        } else {
            0
        };
        let next_frame = script.get(start + len).and_then(|w| w.frame).unwrap_or(0);

        let avg_step = if next_frame > prev_frame {
            (next_frame - prev_frame) as f64 / (len + 1) as f64
        } else {
            0.0
        };

        for offset in 1..=len {
            let word = &mut script[start + offset - 1];
            word.frame = Some(prev_frame + (avg_step * offset as f64).round() as u64);
            word.duration = Some(avg_step.round() as u64);
        }
    }
}
