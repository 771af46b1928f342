use std::io::{self, Write};

use anyhow::{anyhow, Result};
use big_integer::{BigInt, Radix, TokenReader};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bigint-driver")]
#[command(about = "Exercises BigInt arithmetic and text conversion", long_about = None)]
struct Cli {
    /// Radix used for both input and output
    #[arg(value_enum, default_value_t = Radix::Decimal)]
    radix: Radix,
}

/// Something the driver can print in the current radix.
trait Show {
    fn render(&self, radix: Radix) -> String;
}

impl Show for BigInt {
    fn render(&self, radix: Radix) -> String {
        self.annotated(radix).to_string()
    }
}

impl Show for bool {
    fn render(&self, _radix: Radix) -> String {
        self.to_string()
    }
}

macro_rules! show {
    ($radix: expr, $($e: expr),+) => {
        {
            let parts: Vec<String> = vec![$(format!("{} = {}", stringify!($e), Show::render(&$e, $radix))),+];
            println!("{}", parts.join(", "));
        }
    };
}

fn read_value<R: io::BufRead>(reader: &mut TokenReader<R>, radix: Radix, name: &str) -> Result<BigInt> {
    print!("Enter new value for {}: ", name);
    io::stdout().flush()?;
    reader
        .next_big_int(radix)?
        .ok_or_else(|| anyhow!("expected a value for {} on standard input", name))
}

fn run(radix: Radix) -> Result<()> {
    println!("Input and Output in {}", radix);

    let zero = BigInt::zero();
    let ten = BigInt::from(10);

    let mut i = BigInt::from(u64::MAX - 2);
    let j = BigInt::from(8000000000000000011_i64);
    let k = i.clone();
    show!(radix, i == k);
    show!(radix, i, j, k, i < j);
    i += &j;
    show!(radix, i, j, k);
    show!(radix, i > j, j > k, i < j, j < k);
    show!(radix, i == k, i == j, j == k);

    let a1 = BigInt::from(-7);
    let mut a2 = BigInt::from(100);
    let mut a3 = BigInt::zero();
    show!(radix, a1, a2, a3);
    a2 += &a1;
    a3 = &a1 + &a2;
    show!(radix, a1, a2, a3);
    show!(radix, a1, &a2 - &a1, a3);
    show!(radix, a1, &a2 + &a1, a3);
    a2 -= &a3;
    show!(radix, a2);

    i = &j + &j;
    show!(radix, i);
    show!(radix, &i + &k);
    i <<= 32_u32;
    show!(radix, i);
    i >>= 4_u32;
    show!(radix, i);
    show!(radix, &(&a1 + &a2) + &a3);

    show!(radix, a2);
    show!(radix, a2.post_inc());
    show!(radix, a2);
    show!(radix, a2.inc().clone());
    show!(radix, a2);
    show!(radix, a2.post_dec());
    show!(radix, a2);
    show!(radix, a2.dec().clone());
    show!(radix, a2);

    i &= BigInt::one();
    show!(radix, i);

    let mut foo = BigInt::from(298653);
    show!(radix, foo);
    foo = foo.checked_div(&BigInt::from(17))?;
    show!(radix, foo);
    show!(radix, foo.checked_div(&BigInt::from(16))?);
    show!(radix, &foo * &BigInt::from(16));
    foo *= BigInt::from(256);
    show!(radix, foo);
    let mut foo2 = BigInt::from(-1);
    show!(radix, foo2);
    foo *= &foo2;
    show!(radix, foo);
    show!(radix, foo.checked_rem(&ten)?);
    foo = foo.checked_rem(&ten)?;
    show!(radix, foo);
    show!(radix, zero.logical_and(&zero), zero.logical_and(&ten), ten.logical_and(&ten));
    show!(radix, zero.logical_or(&zero), zero.logical_or(&ten), ten.logical_or(&ten));

    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());
    foo = read_value(&mut reader, radix, "foo")?;
    show!(radix, foo);
    foo2 = read_value(&mut reader, radix, "foo2")?;
    show!(radix, foo2);
    show!(radix, &foo * &foo2);
    show!(radix, foo.checked_div(&foo2)?);
    show!(radix, foo.checked_rem(&foo2)?);

    let str_to_num1 = BigInt::parse("123456789012345678901234567890");
    let str_to_num2 = BigInt::parse("+987654321098765432109876543210");
    let str_to_num3 = BigInt::parse("-987654321098765432109876543210");
    show!(radix, str_to_num1);
    show!(radix, str_to_num2);
    show!(radix, str_to_num3);
    let str_to_num_hex = BigInt::parse("0xaaaaaaaaaaaaaaaaaaaaabbbbbbbbbbbbbbbbb");
    let str_to_num_octal = BigInt::parse("012345671234567123456712345671234567001");
    show!(radix, str_to_num_hex);
    show!(radix, str_to_num_octal);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli.radix)
}
