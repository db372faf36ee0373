use std::sync::Arc;
use async_trait::async_trait;
use bytes::Bytes;
use criterion::{criterion_group, criterion_main, Criterion};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use steam_community_session::{Error, HttpExecutor, InventoryPager, SteamID};
use steam_community_session::http::{HttpRequest, HttpResponse};
use steam_community_session::inventory::{filters, FilterChain};

/// Responds to every request with the same inventory page.
struct StaticPage(&'static [u8]);

#[async_trait]
impl HttpExecutor for StaticPage {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, Error> {
        Ok(HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(self.0),
        })
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let page = include_bytes!("fixtures/inventory_page.json");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let pager = InventoryPager::new(Arc::new(StaticPage(page)));
    let steamid = SteamID::from(76561198080179568);
    let tradable = FilterChain::new()
        .with(filters::has_amount)
        .with(filters::is_tradable);
    
    c.bench_function("decodes and merges inventory page", |b| b.iter(|| {
        runtime.block_on(pager.get_inventory(steamid, 440, 2)).ok();
    }));
    
    c.bench_function("decodes, merges and filters inventory page", |b| b.iter(|| {
        runtime.block_on(pager.get_filtered_inventory(steamid, 440, 2, &tradable)).ok();
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
