use pricy::{
    BulkDiscount, LoyaltyDiscount, Pricy, PromoCodeDiscount, SeasonalDiscount, TaxCalculator,
    quote::preset,
};

fn main() {
    println!("=== PRICY PIPELINE EXAMPLES ===\n");

    let cart_price = 100.0;

    // ========================================
    // 1. Preset quotes — one builder call each
    // ========================================
    println!("1. Preset quotes on a ${cart_price} cart\n");

    let everyday = preset::everyday();
    let sale = preset::seasonal_sale(25.0).unwrap();
    let member = preset::member_checkout(3).unwrap();
    let wholesale = preset::wholesale(12).unwrap();
    let full = preset::full_checkout(15, 2).unwrap();

    println!(
        "   {:16} ${:>7.2}   {}",
        everyday.name(),
        everyday.total(cart_price).unwrap(),
        everyday.describe()
    );
    println!(
        "   {:16} ${:>7.2}   {}",
        sale.name(),
        sale.total(cart_price).unwrap(),
        sale.describe()
    );
    println!(
        "   {:16} ${:>7.2}   {}",
        member.name(),
        member.total(cart_price).unwrap(),
        member.describe()
    );
    println!(
        "   {:16} ${:>7.2}   {}",
        wholesale.name(),
        wholesale.total(cart_price).unwrap(),
        wholesale.describe()
    );
    println!(
        "   {:16} ${:>7.2}   {}",
        full.name(),
        full.total(cart_price).unwrap(),
        full.describe()
    );

    // ========================================
    // 2. Wrap order matters
    // ========================================
    println!("\n2. Same stages, different wrap order\n");

    let percent_then_flat = Pricy::builder()
        .with_validation()
        .add_stage(SeasonalDiscount::default())
        .add_stage(PromoCodeDiscount::default().with_code("SAVE5"))
        .add_stage(TaxCalculator::default())
        .build();

    let flat_then_percent = Pricy::builder()
        .with_validation()
        .add_stage(PromoCodeDiscount::default().with_code("SAVE5"))
        .add_stage(SeasonalDiscount::default())
        .add_stage(TaxCalculator::default())
        .build();

    println!(
        "   ${:>7.4}   {}",
        percent_then_flat.compute(cart_price).unwrap(),
        percent_then_flat.describe()
    );
    println!(
        "   ${:>7.4}   {}",
        flat_then_percent.compute(cart_price).unwrap(),
        flat_then_percent.describe()
    );

    // ========================================
    // 3. Gates reflected on the receipt
    // ========================================
    println!("\n3. Bulk gate on the receipt\n");

    for quantity in [5, 10] {
        let cart = Pricy::builder()
            .with_validation()
            .add_stage(BulkDiscount::for_quantity(quantity).unwrap())
            .add_stage(TaxCalculator::default())
            .build();
        println!(
            "   qty {quantity:>2} → ${:>7.2}   {}",
            cart.compute(cart_price).unwrap(),
            cart.describe()
        );
    }

    // ========================================
    // 4. Validation failures surface as errors
    // ========================================
    println!("\n4. Negative input is rejected by the base stage\n");

    let checkout = Pricy::builder()
        .with_validation()
        .add_stage(LoyaltyDiscount::new(2).unwrap())
        .build();
    match checkout.compute(-10.0) {
        Ok(total) => println!("   unexpected total: {total}"),
        Err(e) => println!("   error: {e}"),
    }
}
