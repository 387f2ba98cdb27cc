use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["techstore"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_home_with_limit() {
    let cli = Cli::try_parse_from(["techstore", "home", "--limit", "4"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Home { limit: Some(4) })
    ));
}

#[test]
fn parses_products_listing_options() {
    let cli = Cli::try_parse_from([
        "techstore",
        "products",
        "--category",
        "laptop",
        "--min-price",
        "1000000",
        "--brand",
        "MacBook",
        "--brand",
        "Galaxy",
        "--color",
        "#C0C0C0",
        "--sort",
        "price_desc",
    ])
    .unwrap();

    let Some(Commands::Products(args)) = cli.command else {
        panic!("expected products command");
    };
    assert_eq!(args.category, Some(techstore_core::Category::Laptop));
    assert_eq!(args.brands, ["MacBook", "Galaxy"]);

    let config = args.filter_config().expect("valid filter");
    assert_eq!(config.sort, Some(techstore_core::SortKey::PriceDesc));
    assert!(config.brands.contains("Galaxy"));
    assert_eq!(config.price_range.min(), 1_000_000);
    assert_eq!(args.query().category, Some(techstore_core::Category::Laptop));
}

#[test]
fn products_rejects_unknown_category() {
    let result = Cli::try_parse_from(["techstore", "products", "--category", "toaster"]);
    assert!(result.is_err());
}

#[test]
fn inverted_price_bounds_fail_filter_config() {
    let cli = Cli::try_parse_from([
        "techstore",
        "products",
        "--min-price",
        "500",
        "--max-price",
        "100",
    ])
    .unwrap();
    let Some(Commands::Products(args)) = cli.command else {
        panic!("expected products command");
    };
    assert!(args.filter_config().is_err());
}

#[test]
fn unknown_sort_keeps_backend_order() {
    let cli = Cli::try_parse_from(["techstore", "products", "--sort", "rating"]).unwrap();
    let Some(Commands::Products(args)) = cli.command else {
        panic!("expected products command");
    };
    assert_eq!(args.filter_config().unwrap().sort, None);
}

#[test]
fn parses_cart_add_defaults() {
    let cli = Cli::try_parse_from(["techstore", "cart", "add", "p1"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Add {
                ref product_id,
                color: None,
                quantity: 1,
            }
        }) if product_id == "p1"
    ));
}

#[test]
fn parses_cart_add_with_color_and_quantity() {
    let cli = Cli::try_parse_from([
        "techstore",
        "cart",
        "add",
        "p1",
        "--color",
        "#FFD700",
        "--quantity",
        "3",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Add {
                color: Some(ref color),
                quantity: 3,
                ..
            }
        }) if color == "#FFD700"
    ));
}

#[test]
fn parses_cart_remove_and_clear() {
    let cli = Cli::try_parse_from(["techstore", "cart", "remove", "i1"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Remove { ref item_id }
        }) if item_id == "i1"
    ));

    let cli = Cli::try_parse_from(["techstore", "cart", "clear"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Clear
        })
    ));
}

#[test]
fn parses_shape_defaults() {
    let cli = Cli::try_parse_from(["techstore", "shape", "laptop"]).unwrap();
    let Some(Commands::Shape {
        product_type,
        color,
        scale,
        strict,
        no_rotate,
    }) = cli.command
    else {
        panic!("expected shape command");
    };
    assert_eq!(product_type, "laptop");
    assert_eq!(color, "#FF4500");
    assert!((scale - 1.0).abs() < f32::EPSILON);
    assert!(!strict);
    assert!(!no_rotate);
}

#[test]
fn strict_shape_rejects_unknown_type() {
    assert!(shape::run_shape("toaster", "#FF4500", 1.0, true, true).is_err());
    assert!(shape::run_shape("toaster", "#FF4500", 1.0, false, true).is_ok());
}

#[test]
fn parses_simple_commands() {
    for (arg, expected) in [
        ("session", "Session"),
        ("seed", "Seed"),
        ("status", "Status"),
        ("config", "Config"),
    ] {
        let cli = Cli::try_parse_from(["techstore", arg]).unwrap();
        let matched = match cli.command {
            Some(Commands::Session) => "Session",
            Some(Commands::Seed) => "Seed",
            Some(Commands::Status) => "Status",
            Some(Commands::Config) => "Config",
            _ => "other",
        };
        assert_eq!(matched, expected);
    }
}
