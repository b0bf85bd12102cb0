use common::{CustomerId, OrderId};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    CustomerProfile, CustomerSegment, Money, Order, OrderStatus, PromotionEngine,
    StatusTransitionMatrix, TransitionPolicy,
};

fn make_order(total_major: i64) -> Order {
    Order::new(OrderId::new(), CustomerId::new(), Money::from_major(total_major)).unwrap()
}

fn make_profile(segment: CustomerSegment, past_orders: u32, total_value: i64) -> CustomerProfile {
    CustomerProfile::new(
        CustomerId::new(),
        segment,
        past_orders,
        Money::from_major(total_value),
    )
    .unwrap()
}

fn bench_apply_discounts(c: &mut Criterion) {
    let engine = PromotionEngine::with_default_rules();
    let order = make_order(1000);
    let vip = make_profile(CustomerSegment::Vip, 0, 10_000);

    c.bench_function("domain/apply_discounts_vip", |b| {
        b.iter(|| engine.apply_discounts(&order, &vip));
    });

    let regular = make_profile(CustomerSegment::Regular, 3, 2);
    let small = make_order(40);

    c.bench_function("domain/apply_discounts_no_match", |b| {
        b.iter(|| engine.apply_discounts(&small, &regular));
    });
}

fn bench_transition_matrix(c: &mut Criterion) {
    let matrix = StatusTransitionMatrix::new();

    c.bench_function("domain/can_transition_all_pairs", |b| {
        b.iter(|| {
            let mut allowed = 0;
            for from in OrderStatus::ALL {
                for to in OrderStatus::ALL {
                    if matrix.can_transition(from, to) {
                        allowed += 1;
                    }
                }
            }
            allowed
        });
    });
}

fn bench_full_lifecycle(c: &mut Criterion) {
    let matrix = StatusTransitionMatrix::new();

    c.bench_function("domain/pending_to_closed", |b| {
        b.iter(|| {
            let mut order = make_order(250);
            for status in [
                OrderStatus::Confirmed,
                OrderStatus::Shipped,
                OrderStatus::Delivered,
                OrderStatus::Closed,
            ] {
                order.change_status(status, &matrix).unwrap();
            }
            order
        });
    });
}

fn bench_parse_status(c: &mut Criterion) {
    c.bench_function("domain/parse_status", |b| {
        b.iter(|| OrderStatus::parse("delivered"));
    });
}

criterion_group!(
    benches,
    bench_apply_discounts,
    bench_transition_matrix,
    bench_full_lifecycle,
    bench_parse_status
);
criterion_main!(benches);
