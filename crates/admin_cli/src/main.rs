use std::error::Error;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use engine::{
    ApprovalStatus, Engine, employees, leave_records, leave_remaining, salary_payments,
};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, NotSet, Set};

#[derive(Parser, Debug)]
#[command(name = "hrdesk_admin")]
#[command(about = "Admin utilities for hrdesk (bootstrap employees, leave and payroll)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./hrdesk.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new employee.
    Employee(EmployeeArgs),
    /// Create or overwrite an employee's leave balance.
    Balance(BalanceArgs),
    /// Record a leave interval as produced by the approval workflow.
    Leave(LeaveArgs),
    /// Append a payroll entry.
    Payment(PaymentArgs),
    /// Grant the special leave reward, same as the HTTP endpoint.
    Reward(RewardArgs),
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[arg(long)]
    name: String,
}

#[derive(Args, Debug)]
struct BalanceArgs {
    #[arg(long)]
    employee_id: i32,
    #[arg(long, default_value_t = 0)]
    annual: i32,
    #[arg(long, default_value_t = 0)]
    sick: i32,
    #[arg(long, default_value_t = 0)]
    special: i32,
}

#[derive(Args, Debug)]
struct LeaveArgs {
    #[arg(long)]
    employee_id: i32,
    /// First day of leave (YYYY-MM-DD).
    #[arg(long)]
    start: NaiveDate,
    /// Last day of leave, included (YYYY-MM-DD).
    #[arg(long)]
    end: NaiveDate,
    #[arg(long, default_value = "pending", value_parser = parse_status)]
    status: ApprovalStatus,
}

#[derive(Args, Debug)]
struct PaymentArgs {
    #[arg(long)]
    employee_id: i32,
    /// Payment day (YYYY-MM-DD).
    #[arg(long)]
    date: NaiveDate,
    #[arg(long)]
    base_salary: i64,
    #[arg(long, default_value_t = 0)]
    incentive: i64,
}

#[derive(Args, Debug)]
struct RewardArgs {
    #[arg(long)]
    employee_id: i32,
}

fn parse_status(raw: &str) -> Result<ApprovalStatus, String> {
    match raw {
        "pending" => Ok(ApprovalStatus::Pending),
        "approved" => Ok(ApprovalStatus::Approved),
        "rejected" => Ok(ApprovalStatus::Rejected),
        other => Err(format!("unsupported approval status: {other}")),
    }
}

fn fail(message: String, code: i32) -> ! {
    eprintln!("{message}");
    std::process::exit(code);
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn require_employee(
    db: &DatabaseConnection,
    employee_id: i32,
) -> Result<employees::Model, Box<dyn Error + Send + Sync>> {
    match employees::Entity::find_by_id(employee_id).one(db).await? {
        Some(employee) => Ok(employee),
        None => fail(format!("employee not found: {employee_id}"), 1),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;

    match cli.command {
        Command::Employee(args) => {
            let name = args.name.trim();
            if name.is_empty() {
                fail("employee name must not be empty".to_string(), 2);
            }

            let employee = employees::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
            }
            .insert(&db)
            .await?;

            println!("created employee: {} ({})", employee.name, employee.id);
        }
        Command::Balance(args) => {
            require_employee(&db, args.employee_id).await?;
            if args.annual < 0 || args.sick < 0 || args.special < 0 {
                fail("leave balances must not be negative".to_string(), 2);
            }

            let balance = leave_remaining::ActiveModel {
                employee_id: Set(args.employee_id),
                remaining_annual_leave: Set(args.annual),
                remaining_sick_leave: Set(args.sick),
                remaining_special_leave: Set(args.special),
            };
            if leave_remaining::Entity::find_by_id(args.employee_id)
                .one(&db)
                .await?
                .is_some()
            {
                balance.update(&db).await?;
            } else {
                balance.insert(&db).await?;
            }

            println!(
                "balance for employee {}: annual={} sick={} special={}",
                args.employee_id, args.annual, args.sick, args.special
            );
        }
        Command::Leave(args) => {
            require_employee(&db, args.employee_id).await?;
            if args.start > args.end {
                fail(
                    format!("leave starts after it ends: {} > {}", args.start, args.end),
                    2,
                );
            }

            let record = leave_records::ActiveModel {
                id: NotSet,
                employee_id: Set(args.employee_id),
                start_date: Set(args.start),
                end_date: Set(args.end),
                approval_status: Set(args.status.as_i32()),
            }
            .insert(&db)
            .await?;

            println!(
                "recorded leave {} for employee {}: {} day(s), {:?}",
                record.id,
                record.employee_id,
                record.duration_days(),
                args.status
            );
        }
        Command::Payment(args) => {
            require_employee(&db, args.employee_id).await?;
            if args.incentive < 0 {
                fail("incentive must not be negative".to_string(), 2);
            }

            let payment = salary_payments::ActiveModel {
                id: NotSet,
                employee_id: Set(args.employee_id),
                payment_date: Set(args.date),
                base_salary: Set(args.base_salary),
                incentive: Set(args.incentive),
            }
            .insert(&db)
            .await?;

            println!(
                "recorded payment {} for employee {} on {}",
                payment.id, payment.employee_id, payment.payment_date
            );
        }
        Command::Reward(args) => {
            let engine = Engine::builder().database(db.clone()).build().await?;
            let balance = engine.reward_special_leave(args.employee_id).await?;
            println!(
                "employee {} now has {} day(s) of special leave",
                balance.employee_id, balance.remaining_special_leave
            );
        }
    }

    db.close().await?;
    Ok(())
}
