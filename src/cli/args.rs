use std::path::PathBuf;

use arqa_domain::{FieldFilter, GroupSpec, Period, Query, SortSpec};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};

use super::value_enum::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "arqa",
    version = crate::VERSION,
    about = "Orders and customers analytics over JSON data files"
)]
pub struct Args {
    /// Directory holding orders.json and customers.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// YAML settings file; command-line flags take precedence
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the result to a file instead of stdout
    #[arg(long, short = 'o', global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List, filter, sort or group orders
    Orders(OrdersArgs),
    /// List, filter, sort or group customers
    Customers(CustomersArgs),
    /// Show one customer with their order history
    Customer(CustomerArgs),
    /// Revenue, average order value and revenue by day
    Dashboard(DashboardArgs),
    /// Query any JSON file of flat records
    Query(RecordsArgs),
}

/// Search, filter, sort and group-by flags shared by every listing.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Case-insensitive substring looked for in the searchable fields
    #[arg(long, short = 's', value_name = "TERM")]
    pub search: Option<String>,

    /// Exact match: `field=text`, or `field:=json` for numbers and booleans
    #[arg(long = "where", short = 'w', value_name = "FILTER")]
    pub filters: Vec<FieldFilter>,

    /// Sort key: `field`, `field:asc` or `field:desc`
    #[arg(long, value_name = "SPEC")]
    pub sort: Option<SortSpec>,

    /// Bucket rows by this field (needs --sum)
    #[arg(long, value_name = "FIELD", requires = "sum")]
    pub group_by: Option<String>,

    /// Field summed inside each bucket (needs --group-by)
    #[arg(long, value_name = "FIELD", requires = "group_by")]
    pub sum: Option<String>,
}

impl QueryArgs {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new()
            .search(self.search.clone().unwrap_or_default())
            .filters(self.filters.iter().cloned());
        if let Some(spec) = &self.sort {
            query = query.sort_by(spec.clone());
        }
        if let (Some(field), Some(sum)) = (&self.group_by, &self.sum) {
            query = query.group_by(GroupSpec::sum(field, sum));
        }
        query
    }
}

/// Which orders are loaded before the query runs.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct WindowArgs {
    /// Only orders from this window: 7d, 30d, qtd or ytd
    #[arg(long, value_name = "PERIOD")]
    pub period: Option<Period>,

    /// Reference day for --period (defaults to the local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub channel: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct OrdersArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(ClapArgs, Debug)]
pub struct CustomersArgs {
    /// Only customers from this city
    #[arg(long)]
    pub city: Option<String>,

    /// Print the distinct customer cities instead of customers
    #[arg(long, conflicts_with_all = ["city", "group_by"])]
    pub cities: bool,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(ClapArgs, Debug)]
pub struct CustomerArgs {
    /// Customer id
    pub id: String,
}

#[derive(ClapArgs, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Also write revenue by day as CSV (`date,revenue,orders`)
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct RecordsArgs {
    /// JSON file: an array of objects, or `{"name": [...]}`
    pub file: PathBuf,

    /// Field searched by --search (repeatable); defaults to the first record's text fields
    #[arg(long = "search-field", value_name = "FIELD")]
    pub search_fields: Vec<String>,

    #[command(flatten)]
    pub query: QueryArgs,
}
