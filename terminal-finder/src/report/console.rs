//! Console rendering of lookup outcomes.

use std::io::{self, Write};

use crate::domain::TerminalRecord;
use crate::finder::{FindOutcome, RankedResult};

/// List candidates with their selection index.
pub fn render_candidates<'a, W, I>(out: &mut W, query: &str, candidates: I) -> io::Result<()>
where
    W: Write,
    I: ExactSizeIterator<Item = &'a TerminalRecord>,
{
    writeln!(out, "\n'{}' 검색 결과 {}건:", query, candidates.len())?;
    for (i, record) in candidates.enumerate() {
        writeln!(out, "  [{i}] {record}")?;
    }
    Ok(())
}

fn render_origin<W: Write>(out: &mut W, origin: &TerminalRecord) -> io::Result<()> {
    writeln!(out, "\n기준 터미널: {origin}")?;
    if let Some(coordinate) = origin.coordinate {
        writeln!(out, "좌표: {coordinate}")?;
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, results: &[RankedResult]) -> io::Result<()> {
    writeln!(out, "총 {}개 시/군/구 (가까운 순):\n", results.len())?;
    writeln!(out, "{:>8}  {:<12}  {:<16}  터미널명", "거리(km)", "시/도", "시/군/구")?;
    writeln!(out, "{}", "-".repeat(70))?;
    for r in results {
        writeln!(
            out,
            "{:>8.1}  {:<12}  {:<16}  {}",
            r.distance_km, r.province, r.city, r.name
        )?;
    }
    Ok(())
}

/// Render an outcome as human-readable text.
pub fn render_outcome<W: Write>(out: &mut W, outcome: &FindOutcome) -> io::Result<()> {
    match outcome {
        FindOutcome::NoMatch { .. } => writeln!(out, "검색 결과가 없습니다."),
        FindOutcome::Ambiguous { query, candidates } => {
            render_candidates(out, query, candidates.iter())?;
            writeln!(out, "여러 터미널이 검색되었습니다. 번호를 지정하세요.")
        }
        FindOutcome::NoRouteInfo { origin } => {
            render_origin(out, origin)?;
            writeln!(out, "'{}'의 노선 정보를 가져올 수 없습니다.", origin.name)
        }
        FindOutcome::Empty { origin, radius_km } => {
            render_origin(out, origin)?;
            writeln!(out, "반경 {radius_km}km 범위 내 노선 연결 터미널이 없습니다.")
        }
        FindOutcome::Found {
            origin, results, ..
        } => {
            render_origin(out, origin)?;
            writeln!(out)?;
            render_table(out, results)
        }
    }
}
