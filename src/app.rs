// src/app.rs
use arqa_domain::{Bucket, Customer, Order, QueryEngine, QueryResult, SearchFields, SortSpec};
use arqa_infra::{JsonDataStore, JsonRecordFile, persistence::FileWriter};
use arqa_ports::{datasource::OrderFetchPlan, records::RecordSource};
use arqa_shared_kernel::{Cell, ErrorContext, Record, Result, Tabular, Value};
use arqa_usecase::{BrowseCustomers, BrowseOrders, CustomerDetail, DashboardReport, QueryRecords};
use chrono::Local;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::{
        Command, OutputFormat,
        args::{CustomersArgs, DashboardArgs, OrdersArgs, QueryArgs, RecordsArgs, WindowArgs},
    },
    config::Config,
    presentation::{self, Grid},
};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written,
    /// The command ran but had nothing to show (unknown customer).
    NotFound(String),
}

/// Runs the configured command and writes its output.
pub fn run(config: &Config) -> Result<Outcome> {
    let store = JsonDataStore::new(&config.data_dir);
    debug!(data_dir = %config.data_dir.display(), format = ?config.format, "running");

    let text = match &config.command {
        Command::Orders(args) => orders(&store, args, config)?,
        Command::Customers(args) => customers(&store, args, config.format)?,
        Command::Customer(args) => match customer(&store, &args.id, config.format)? {
            Some(text) => text,
            None => return Ok(Outcome::NotFound(format!("no customer with id '{}'", args.id))),
        },
        Command::Dashboard(args) => dashboard(&store, args, config)?,
        Command::Query(args) => records(args, config)?,
    };

    presentation::emit(&text, config.output.as_deref())?;
    Ok(Outcome::Written)
}

fn fetch_plan(window: &WindowArgs, config: &Config, always_windowed: bool) -> OrderFetchPlan {
    let mut plan = OrderFetchPlan::default();
    let period = window.period.or(always_windowed.then_some(config.default_period));
    if let Some(period) = period {
        let today = window.today.unwrap_or_else(|| Local::now().date_naive());
        plan = plan.since(period.start_date(today));
    }
    if let Some(city) = &window.city {
        plan = plan.city(city);
    }
    if let Some(channel) = &window.channel {
        plan = plan.channel(channel);
    }
    plan
}

fn orders(store: &JsonDataStore, args: &OrdersArgs, config: &Config) -> Result<String> {
    let plan = fetch_plan(&args.window, config, false);
    let query = args.query.to_query().sort_or(SortSpec::descending(Order::DATE));
    let result = BrowseOrders::new(store).run(&plan, &query)?;
    render_result(&result, &args.query, Order::COLUMNS, config.format)
}

fn customers(store: &JsonDataStore, args: &CustomersArgs, format: OutputFormat) -> Result<String> {
    let usecase = BrowseCustomers::new(store);
    if args.cities {
        let cities = usecase.cities()?;
        return render(&cities, format, || {
            Grid {
                headers: vec![Customer::CITY.to_string()],
                rows: cities.iter().map(|c| vec![Some(Value::from(c.as_str()))]).collect(),
            }
        });
    }

    let mut query = args.query.to_query().sort_or(SortSpec::ascending(Customer::NAME));
    if let Some(city) = &args.city {
        query = query.filter(Customer::CITY, city.as_str());
    }
    let result = usecase.run(&query)?;
    render_result(&result, &args.query, Customer::COLUMNS, format)
}

fn customer(store: &JsonDataStore, id: &str, format: OutputFormat) -> Result<Option<String>> {
    let Some(profile) = CustomerDetail::new(store, store).run(id)? else {
        return Ok(None);
    };
    if format == OutputFormat::Json {
        return presentation::to_json(&profile).map(Some);
    }

    let card = Grid::key_values(
        Customer::COLUMNS
            .iter()
            .filter_map(|field| profile.customer.cell(field).map(|cell| (*field, cell.to_value()))),
    );
    let history = Grid::from_rows(&profile.orders, Order::COLUMNS);
    let mut text = card.render(format).unwrap_or_default();
    text.push('\n');
    text.push_str(&history.render(format).unwrap_or_default());
    Ok(Some(text))
}

fn dashboard(store: &JsonDataStore, args: &DashboardArgs, config: &Config) -> Result<String> {
    let plan = fetch_plan(&args.window, config, true);
    let output = DashboardReport::new(store).run(&plan)?;

    if let Some(path) = &args.export {
        FileWriter::atomic_write(path, presentation::dashboard_csv(&output.revenue_by_date).as_bytes())
            .with_context(|| format!("exporting dashboard to {}", path.display()))?;
        info!(path = %path.display(), days = output.revenue_by_date.len(), "dashboard exported");
    }

    match config.format {
        OutputFormat::Json => presentation::to_json(&output),
        OutputFormat::Csv => Ok(presentation::dashboard_csv(&output.revenue_by_date)),
        format => {
            let m = &output.metrics;
            let card = Grid::key_values([
                ("revenue", Value::Number(m.revenue)),
                ("orders", Value::from(m.orders_count as i64)),
                ("aov", Value::Number(m.aov)),
                ("conversion", Value::Number(m.conversion_rate)),
            ]);
            let chart = daily_grid(&output.revenue_by_date);
            let mut text = card.render(format).unwrap_or_default();
            text.push('\n');
            text.push_str(&chart.render(format).unwrap_or_default());
            Ok(text)
        }
    }
}

fn daily_grid(buckets: &[Bucket]) -> Grid {
    let mut grid = Grid::from_buckets(buckets, Order::DATE, Order::TOTAL);
    grid.headers = vec!["date".to_string(), "revenue".to_string(), "orders".to_string()];
    grid
}

fn records(args: &RecordsArgs, config: &Config) -> Result<String> {
    let source = JsonRecordFile::new(&args.file);
    let fields = if !args.search_fields.is_empty() {
        args.search_fields.clone()
    } else if !config.search_fields.is_empty() {
        config.search_fields.clone()
    } else {
        text_fields(&source)?
    };
    debug!(?fields, "search fields");

    let engine = QueryEngine::new(SearchFields::new(fields));
    let result = QueryRecords::new(&source, engine).run(&args.query.to_query())?;
    let columns = match &result {
        QueryResult::Rows(rows) => union_of_fields(rows),
        QueryResult::Buckets(_) => Vec::new(),
    };
    let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
    render_result(&result, &args.query, &columns, config.format)
}

/// Text-valued fields of the first record.
fn text_fields(source: &JsonRecordFile) -> Result<Vec<String>> {
    let records = source.records()?;
    Ok(records
        .first()
        .map(|first| {
            first
                .iter()
                .filter(|(_, v)| matches!(v.as_cell(), Cell::Text(_)))
                .map(|(k, _)| k.to_string())
                .collect()
        })
        .unwrap_or_default())
}

/// Every field name seen across `rows`, in first-appearance order.
fn union_of_fields(rows: &[Record]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for row in rows {
        for name in row.fields() {
            if !fields.iter().any(|f| f == name) {
                fields.push(name.to_string());
            }
        }
    }
    fields
}

fn render_result<R: Tabular + Serialize>(
    result: &QueryResult<R>,
    args: &QueryArgs,
    columns: &[&str],
    format: OutputFormat,
) -> Result<String> {
    match result {
        QueryResult::Rows(rows) => render(rows, format, || Grid::from_rows(rows, columns)),
        QueryResult::Buckets(buckets) => render(buckets, format, || {
            Grid::from_buckets(
                buckets,
                args.group_by.as_deref().unwrap_or_default(),
                args.sum.as_deref().unwrap_or_default(),
            )
        }),
    }
}

fn render<T: Serialize + ?Sized>(data: &T, format: OutputFormat, grid: impl FnOnce() -> Grid) -> Result<String> {
    if format == OutputFormat::Json {
        return presentation::to_json(data);
    }
    Ok(grid().render(format).unwrap_or_default())
}
