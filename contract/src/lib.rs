pub mod buy_it_now;
