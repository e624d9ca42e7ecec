#[macro_export]
macro_rules! print_red {
    ($($arg:tt)*) => {
        println!("{}", colored::Colorize::red(format!($($arg)*).as_str()));
    };
}

#[macro_export]
macro_rules! print_green {
    ($($arg:tt)*) => {
        println!("{}", colored::Colorize::green(format!($($arg)*).as_str()));
    };
}

#[macro_export]
macro_rules! print_yellow {
    ($($arg:tt)*) => {
        println!("{}", colored::Colorize::yellow(format!($($arg)*).as_str()));
    };
}

#[macro_export]
macro_rules! print_blue {
    ($($arg:tt)*) => {
        println!("{}", colored::Colorize::blue(format!($($arg)*).as_str()));
    };
}
