use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};

pub fn create_cmd_args() -> Command {
    Command::new("despeckle")
        .about("Remove speckle noise from a grayscale scan and binarize it")
        .arg(Arg::new("id")
            .value_name("IMAGE_ID")
            .help("Image number (1-5); selects DIR/<id>.jpg and the preset threshold")
            .value_parser(value_parser!(u32).range(1..=5))
            .required(true))
        .arg(Arg::new("dir")
            .long("dir")
            .value_name("DIR")
            .help("Directory holding the numbered images")
            .default_value("img"))
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .value_name("PATH")
            .help("Read from PATH instead of DIR/<id>.jpg"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("PATH")
            .help("Write to PATH instead of DIR/<id>_new.jpg"))
        .arg(Arg::new("threshold")
            .long("threshold")
            .value_name("N")
            .help_heading("THRESHOLD")
            .help("Fixed binarization threshold instead of the preset one")
            .long_help("Fixed binarization threshold. Pixels at or above N become white.\n0 makes every pixel white, 256 every pixel black.")
            .value_parser(value_parser!(u16).range(0..=256)))
        .arg(Arg::new("otsu")
            .long("otsu")
            .action(ArgAction::SetTrue)
            .help_heading("THRESHOLD")
            .help("Pick one threshold for the whole image with Otsu's method"))
        .arg(Arg::new("tiled-otsu")
            .long("tiled-otsu")
            .action(ArgAction::SetTrue)
            .help_heading("THRESHOLD")
            .help("Pick a separate Otsu threshold for every tile"))
        .arg(Arg::new("tile-size")
            .long("tile-size")
            .value_name("N")
            .help_heading("THRESHOLD")
            .help("Tile side length for --tiled-otsu")
            .default_value("10")
            .requires("tiled-otsu")
            .value_parser(value_parser!(u32).range(1..)))
        .arg(Arg::new("symmetric")
            .long("symmetric")
            .action(ArgAction::SetTrue)
            .help_heading("MORPHOLOGY")
            .help("Keep erosion and dilation centers away from the right and bottom edges too"))
        .group(ArgGroup::new("threshold-source")
            .args(["threshold", "otsu", "tiled-otsu"])
            .multiple(false))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display progress information"))
}
