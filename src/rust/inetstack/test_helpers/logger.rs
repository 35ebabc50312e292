// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::flexi_logger::{
    writers::LogWriter,
    DeferredNow,
    Logger,
    LoggerHandle,
};
use ::log::{
    Level,
    LevelFilter,
    Record,
};
use ::std::{
    io,
    sync::{
        Mutex,
        Once,
        OnceLock,
    },
    thread::{
        self,
        ThreadId,
    },
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// A log record kept in memory for inspection by tests.
#[derive(Clone, Debug)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Writer that keeps every record, tagged with the thread that emitted it.
struct CaptureWriter;

//======================================================================================================================
// Static Variables
//======================================================================================================================

static INIT_LOG: Once = Once::new();

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

static RECORDS: Mutex<Vec<(ThreadId, CapturedRecord)>> = Mutex::new(Vec::new());

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Installs the capturing logger for the whole test binary. Every level is recorded.
pub fn initialize() {
    INIT_LOG.call_once(|| {
        let logger: Logger = match Logger::try_with_str("trace") {
            Ok(logger) => logger,
            Err(e) => panic!("invalid log specification (error={:?})", e),
        };
        match logger.log_to_writer(Box::new(CaptureWriter)).start() {
            Ok(handle) => {
                let _ = LOGGER.set(handle);
            },
            Err(e) => panic!("failed to start logger (error={:?})", e),
        }
    });
}

/// Removes and returns the records emitted so far by the calling thread.
pub fn take_records() -> Vec<CapturedRecord> {
    let current: ThreadId = thread::current().id();
    let mut records = RECORDS.lock().unwrap_or_else(|e| e.into_inner());
    let (mine, others): (Vec<_>, Vec<_>) = records.drain(..).partition(|(id, _)| *id == current);
    *records = others;
    mine.into_iter().map(|(_, record)| record).collect()
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl LogWriter for CaptureWriter {
    fn write(&self, _now: &mut DeferredNow, record: &Record) -> io::Result<()> {
        let captured: CapturedRecord = CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        RECORDS
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((thread::current().id(), captured));
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    fn max_log_level(&self) -> LevelFilter {
        LevelFilter::Trace
    }
}
