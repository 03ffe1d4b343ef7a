use super::ScanSummary;
use crate::core::SourceScan;

pub fn scan_summary(scan: &SourceScan) -> ScanSummary {
    ScanSummary {
        stats: scan.stats.clone(),
        used_count: scan.kept.len(),
        excluded: scan.excluded.texts().map(str::to_string).collect(),
    }
}
