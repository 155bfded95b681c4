//! Integration tests over URL-shaped inputs.

use pagefilter::params::keys::PAGE_FILTER_PARAMS;
use pagefilter::{
    get_state_from_query, normalize_date_time_params, parse_query_string,
    pick_page_filter_params, NormalizeOptions, ParamValue, QueryParams,
};
use time::macros::{datetime, offset};
use time::UtcOffset;

fn query(pairs: &[(&str, ParamValue)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn integration_page_period_precedence() {
    let q = query(&[("pageStatsPeriod", "7d".into()), ("statsPeriod", "30d".into())]);
    for allow_page in [false, true] {
        let opts = NormalizeOptions {
            allow_absolute_page_datetime: allow_page,
            ..Default::default()
        };
        let out = normalize_date_time_params(&q, &opts);
        assert_eq!(out.stats_period.as_deref(), Some("7d"));
    }
}

#[test]
fn integration_period_excludes_absolute_range() {
    let q = parse_query_string("statsPeriod=24h&start=2021-01-01&end=2021-01-02");
    let out = normalize_date_time_params(&q, &NormalizeOptions::default());
    assert_eq!(out.stats_period.as_deref(), Some("24h"));
    assert!(out.start.is_none());
    assert!(out.end.is_none());
}

#[test]
fn integration_default_period_when_empty() {
    let out = normalize_date_time_params(&QueryParams::new(), &NormalizeOptions::default());
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({"statsPeriod": "14d"})
    );

    let custom = NormalizeOptions {
        default_stats_period: Some("90d".into()),
        ..Default::default()
    };
    let out = normalize_date_time_params(&QueryParams::new(), &custom);
    assert_eq!(out.stats_period.as_deref(), Some("90d"));
}

#[test]
fn integration_empty_period_allowed() {
    let opts = NormalizeOptions {
        allow_empty_period: true,
        ..Default::default()
    };
    let out = normalize_date_time_params(&QueryParams::new(), &opts);
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json, serde_json::json!({}));
    assert_eq!(out.to_query_string(), "");
}

#[test]
fn integration_list_first_valid_period() {
    let q = query(&[("statsPeriod", vec!["bogus", "7d", "30d"].into())]);
    let out = normalize_date_time_params(&q, &NormalizeOptions::default());
    assert_eq!(out.stats_period.as_deref(), Some("7d"));

    let from_url = parse_query_string("statsPeriod=bogus&statsPeriod=7d&statsPeriod=30d");
    let out = normalize_date_time_params(&from_url, &NormalizeOptions::default());
    assert_eq!(out.stats_period.as_deref(), Some("7d"));
}

#[test]
fn integration_utc_coercion() {
    let cases: [(Option<ParamValue>, Option<&str>); 4] = [
        (Some(true.into()), Some("true")),
        (Some("true".into()), Some("true")),
        (Some("false".into()), Some("false")),
        (None, None),
    ];
    for (raw, expected) in cases {
        let q: QueryParams = raw.into_iter().map(|v| ("utc".to_string(), v)).collect();
        let out = normalize_date_time_params(&q, &NormalizeOptions::default());
        assert_eq!(out.utc.as_deref(), expected);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json.get("utc").is_some(), expected.is_some());
    }
}

#[test]
fn integration_project_parsing() {
    let opts = NormalizeOptions::default();
    let state = |q: &str| get_state_from_query(&parse_query_string(q), &opts).project;
    assert_eq!(state("project=abc"), Some(vec![]));
    assert_eq!(state(""), None);
    assert_eq!(state("project=1&project=2"), Some(vec![1, 2]));
    assert_eq!(state("project=1"), Some(vec![1]));
}

#[test]
fn integration_period_with_dates_scenario() {
    let q = query(&[
        ("statsPeriod", "14d".into()),
        ("start", "2021-01-01".into()),
        ("end", "2021-01-02".into()),
    ]);
    let out = normalize_date_time_params(&q, &NormalizeOptions::default());
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        serde_json::json!({"statsPeriod": "14d"})
    );
}

#[test]
fn integration_pick_then_normalize() {
    let q = parse_query_string(
        "project=3&environment=prod&statsPeriod=7d&cursor=0:100:0&query=is:unresolved&sort=freq",
    );
    let picked = pick_page_filter_params(&q, &["cursor"]);
    assert!(picked
        .keys()
        .all(|k| PAGE_FILTER_PARAMS.contains(&k.as_str()) || k == "cursor"));

    let out = normalize_date_time_params(&picked, &NormalizeOptions::default());
    assert_eq!(
        out.to_query_string(),
        "cursor=0%3A100%3A0&environment=prod&project=3&statsPeriod=7d"
    );
}

#[test]
fn integration_passthrough_keeps_repeated_order() {
    let q = parse_query_string("environment=b&environment=a&start=2021-01-01&end=2021-01-03");
    let out = normalize_date_time_params(&q, &NormalizeOptions::default());
    assert_eq!(
        out.others.get("environment"),
        Some(&ParamValue::from(vec!["b", "a"]))
    );
    let again = parse_query_string(&out.to_query_string());
    assert_eq!(again.get("environment"), out.others.get("environment"));
    assert_eq!(
        again.get("start").and_then(ParamValue::as_text),
        Some("2021-01-01T00:00:00.000")
    );
}

#[test]
fn integration_normalized_output_is_stable() {
    let q = parse_query_string("pageStatsPeriod=60&utc=true&project=1");
    let opts = NormalizeOptions::default();
    let once = normalize_date_time_params(&q, &opts);
    let twice = normalize_date_time_params(&once.to_query_params(), &opts);
    assert_eq!(once.stats_period.as_deref(), Some("60s"));
    assert_eq!(once, twice);
}

#[test]
fn integration_lone_bound_kept_when_empty_period_allowed() {
    let opts = NormalizeOptions {
        allow_empty_period: true,
        ..Default::default()
    };
    let q = parse_query_string("start=2021-01-01&end=garbage&project=1");
    let out = normalize_date_time_params(&q, &opts);
    assert_eq!(out.stats_period, None);
    assert_eq!(out.start.as_deref(), Some("2021-01-01T00:00:00.000"));
    assert_eq!(out.end, None);
    assert_eq!(
        out.to_query_string(),
        "project=1&start=2021-01-01T00%3A00%3A00.000"
    );

    let out = normalize_date_time_params(&parse_query_string("end=2021-01-02"), &opts);
    assert_eq!(out.start, None);
    assert_eq!(out.end.as_deref(), Some("2021-01-02T00:00:00.000"));

    let state = get_state_from_query(&parse_query_string("end=2021-01-02"), &opts);
    assert_eq!(state.start, None);
    assert_eq!(state.end, None);
    assert_eq!(state.period, None);
}

#[test]
fn integration_dates_past_calendar_end_degrade_to_default() {
    let q = parse_query_string("start=9999-12-31T23:00:00-05:00&end=9999-12-31T23:30:00-05:00");
    let out = normalize_date_time_params(&q, &NormalizeOptions::default());
    assert_eq!(out.stats_period.as_deref(), Some("14d"));
    assert_eq!(out.start, None);
    assert_eq!(out.end, None);

    let native = datetime!(9999-12-31 23:00).assume_offset(offset!(-5));
    let q = query(&[("start", native.into()), ("end", native.into())]);
    let out = normalize_date_time_params(&q, &NormalizeOptions::default());
    assert_eq!(out.stats_period.as_deref(), Some("14d"));
}

#[test]
fn integration_local_state_at_calendar_end() {
    let q = parse_query_string("start=9999-12-31T22:00:00&end=9999-12-31T23:00:00");
    let state = get_state_from_query(&q, &NormalizeOptions::default()).into_local(offset!(+2));
    assert_eq!(state.start, Some(datetime!(9999-12-31 22:00 UTC)));
    assert_eq!(state.end, Some(datetime!(9999-12-31 23:00 UTC)));
    assert_eq!(state.end.map(|d| d.offset()), Some(UtcOffset::UTC));
}
