use crate::domain::RunContext;
use crate::scraper::search_url;

#[test]
fn context_splits_neighborhood_list() {
    let ctx = RunContext::new("academias", "RS", "Porto Alegre", "Centro,Moinhos de Vento");

    assert_eq!(ctx.queries(), vec![Some("Centro"), Some("Moinhos de Vento")]);
}

#[test]
fn context_trims_and_drops_blank_neighborhoods() {
    let ctx = RunContext::new("cafés", "RS", "Porto Alegre", " Centro , ,Bela Vista ");

    assert_eq!(ctx.queries(), vec![Some("Centro"), Some("Bela Vista")]);
}

#[test]
fn empty_neighborhood_list_means_one_unfiltered_query() {
    let ctx = RunContext::new("restaurantes", "SP", "São Paulo", "");

    assert_eq!(ctx.queries(), vec![None]);
}

#[test]
fn search_url_without_neighborhood() {
    let ctx = RunContext::new("academias", "RS", "Canoas", "");

    let url = search_url(&ctx, None);

    assert_eq!(url, "https://www.bing.com/maps?q=academias+em+Canoas%2C+RS");
}

#[test]
fn search_url_with_neighborhood() {
    let ctx = RunContext::new("cafés", "RS", "Porto Alegre", "Moinhos de Vento");

    let url = search_url(&ctx, Some("Moinhos de Vento"));

    assert!(url.starts_with("https://www.bing.com/maps?q="));
    assert!(url.contains("Moinhos+de+Vento"));
    assert!(url.contains("Porto+Alegre%2C+RS"));
}
