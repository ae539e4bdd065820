use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;
use crate::rules::HAND_SIZE;

/// Complete record of one played hand: what was dealt, what was held, what
/// it turned into and what it paid.
/// Serialized to JSONL format for hand history review.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Shoe seed of the session that played the hand
    pub seed: Option<u64>,
    /// Credits wagered
    pub bet: u8,
    /// The five cards as dealt
    pub dealt: Vec<Card>,
    /// Held flags at the moment of the draw
    pub held: [bool; HAND_SIZE],
    /// The five cards after the draw
    pub final_hand: Vec<Card>,
    pub rank: HandRank,
    pub winnings: u32,
    /// Credit balance once the hand was paid
    pub credits_after: u32,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes [`HandRecord`]s to a JSONL file, one line each, LF only.
///
/// Ids are `YYYYMMDD-NNNNNN` with the date fixed when the logger is opened.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Starts a fresh file, truncating any previous content.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent(path.as_ref())?;
        let file = File::create(path)?;
        Ok(Self::with_file(file, today(), 0))
    }

    /// Appends to an existing history. Numbering continues after the last
    /// record written today, so ids stay unique within the file.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        ensure_parent(path)?;
        let date = today();
        let seq = match fs::read_to_string(path) {
            Ok(contents) => last_seq_for(&contents, &date),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e),
        };
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_file(file, date, seq))
    }

    /// Id generator without a file, for tests.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Writes one record, stamping `ts` with the current time when unset.
    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let Some(w) = self.writer.as_mut() else {
            return Ok(());
        };
        let line = match record.ts {
            Some(_) => serde_json::to_string(record),
            None => serde_json::to_string(&HandRecord {
                ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                ..record.clone()
            }),
        }
        .map_err(std::io::Error::other)?;
        writeln!(w, "{}", line)?;
        w.flush()
    }

    fn with_file(file: File, date: String, seq: u32) -> Self {
        Self {
            writer: Some(BufWriter::new(file)),
            date,
            seq,
        }
    }
}

fn today() -> String {
    Utc::now().format("%Y%m%d").to_string()
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Highest sequence number among `date`'s ids in JSONL `contents`.
fn last_seq_for(contents: &str, date: &str) -> u32 {
    contents
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|v| {
            let id = v.get("hand_id")?.as_str()?;
            let (day, seq) = id.split_once('-')?;
            if day == date { seq.parse::<u32>().ok() } else { None }
        })
        .max()
        .unwrap_or(0)
}
