pub mod daily_pay;
