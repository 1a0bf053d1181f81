use RustedCAS::symbolic::symbolic_engine::Expr;
use RustedCAS::symbolic::variable_map::VariableMap;
use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    // parse a string into a symbolic expression
    let input = "(x^2 + 1) / x";
    let f = Expr::parse_expression(input).unwrap();
    println!("{} parsed as: {}", input, f);

    // evaluate it under a variable environment
    let mut vm = VariableMap::new();
    vm.set("x", Expr::from(2));
    println!("f(2) = {}", f.evaluate(Some(&vm)).unwrap());

    // bindings may refer to other bindings
    vm.set("y", Expr::parse_expression("x + 1").unwrap());
    println!("y = x + 1 evaluates to {}", vm.evaluate("y").unwrap());

    // differentiate, then shrink the raw derivative tree
    let df_dx = f.diff("x", None).unwrap();
    println!("df/dx raw:        {}", df_dx);
    let reduced = df_dx.simplify_fully();
    println!("df/dx simplified: {}", reduced);
    println!("df/dx at x = 2:   {}", reduced.evaluate(Some(&vm)).unwrap());

    info!("demo finished");
}
