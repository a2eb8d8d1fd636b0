use std::fs::read_to_string;
use std::io::{Write as _, stdout};
use std::path::Path;

use lox_astgen::render::CSharp;
use lox_astgen::schema::Schema;
use lox_astgen::{Error, Result, generate, generate_family};

fn main() {
    let args: Args = argh::from_env();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(argh::FromArgs)]
/// Generate visitor-dispatch syntax tree classes from a schema file.
struct Args {
    /// namespace emitted at the top of every generated file
    #[argh(option, default = "default_namespace()")]
    namespace: String,

    /// path to the schema file
    #[argh(positional)]
    schema: String,

    /// output directory, or `-` to print every unit to stdout
    #[argh(positional)]
    out: String,
}

fn default_namespace() -> String {
    "CsLox".into()
}

fn run(args: &Args) -> Result<()> {
    let path = Path::new(&args.schema);
    let text = read_to_string(path).map_err(|source| Error::ReadSchema {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = Schema::parse(&text)?;
    let target = CSharp::new(args.namespace.as_str());

    if args.out == "-" {
        let mut out = stdout().lock();
        for family in schema.families() {
            let unit = generate_family(family, &target);
            out.write_all(unit.as_bytes()).unwrap();
        }
        out.flush().unwrap();
    } else {
        generate(&schema, &target, Path::new(&args.out))?;
    }

    Ok(())
}
