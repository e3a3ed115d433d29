// src/scrape/pipeline.rs
//
// Locate → fetch → extract → normalize, wrapped in the TTL cache.
// Synchronous: one request runs to completion on the caller's thread.

use std::time::{Duration, Instant};

use crate::{
    config::{consts::CACHE_TTL_SECS, options::{Query, Season}},
    core::{html, net::{Fetch, NetError}},
    data::{NormalizedTable, RawTable},
    error::PipelineError,
    progress::Progress,
    specs,
    store::TtlCache,
};

/// Cached entry point. Only successful results are cached.
pub struct Pipeline<F: Fetch> {
    fetcher: F,
    cache: TtlCache<Query, NormalizedTable>,
}

impl<F: Fetch> Pipeline<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_ttl(fetcher, Duration::from_secs(CACHE_TTL_SECS))
    }

    pub fn with_ttl(fetcher: F, ttl: Duration) -> Self {
        Self { fetcher, cache: TtlCache::new(ttl) }
    }

    pub fn cached_entries(&self) -> usize { self.cache.len() }

    pub fn run(
        &mut self,
        query: &Query,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<NormalizedTable, PipelineError> {
        if let Some(hit) = self.cache.get(query) {
            logd!("Cache: hit {:?} {} {} ({} rows)", query.kind, query.competition.name, query.season, hit.len());
            if let Some(p) = progress.as_deref_mut() { p.finish(true); }
            return Ok(hit);
        }
        logd!("Cache: miss {:?} {} {}", query.kind, query.competition.name, query.season);

        if let Some(p) = progress.as_deref_mut() { p.log("Fetching data..."); }

        let res = fetch_and_normalize(&self.fetcher, query);
        match &res {
            Ok(table) => {
                self.cache.purge_expired();
                self.cache.insert(*query, table.clone());
                logf!("Scrape: OK {} {} {} → {} rows", query.competition.name, query.kind, query.season, table.len());
            }
            Err(e) => loge!("Scrape: {} for {} {} {}: {}", e.kind(), query.competition.name, query.kind, query.season, e),
        }

        if let Some(p) = progress.as_deref_mut() { p.finish(res.is_ok()); }
        res
    }
}

/// One uncached pass through the pipeline.
pub fn fetch_and_normalize<F: Fetch + ?Sized>(
    fetcher: &F,
    query: &Query,
) -> Result<NormalizedTable, PipelineError> {
    let url = specs::url_for(query);
    logf!("Scrape: {}", url);

    let raw = extract_table(fetcher, &url, query.season)?;
    specs::normalize(&raw, query.kind)
}

/// Table extractor: fetch `url` and return its first table.
pub fn extract_table<F: Fetch + ?Sized>(
    fetcher: &F,
    url: &str,
    season: Season,
) -> Result<RawTable, PipelineError> {
    let doc = fetcher.get(url).map_err(|e| match e {
        NetError::NotFound(_) => PipelineError::DataUnavailable { season },
        other => PipelineError::Fetch(other.to_string()),
    })?;

    let t = Instant::now();
    let table = html::first_table(&doc).ok_or(PipelineError::DataUnavailable { season })?;
    logd!(
        "Extract: first table {} cols x {} rows in {:?}",
        table.ncols(),
        table.nrows(),
        t.elapsed()
    );
    Ok(table)
}
