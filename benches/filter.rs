use criterion::{Criterion, criterion_group, criterion_main};
use kira_fqfilter::{FilterEngine, FilterOptions, LineReader, NameSet, OutputSink};
use std::io::BufReader;

fn bench_filter(c: &mut Criterion) {
    let mut r1 = String::new();
    let mut r2 = String::new();
    for i in 0..2000 {
        r1.push_str(&format!("@r{i} 1:N:0\nACGTACGTACGTACGT\n+\n################\n"));
        r2.push_str(&format!("@r{i} 2:N:0\nTGCATGCATGCATGCA\n+\n################\n"));
    }
    let names: NameSet = (0..2000).step_by(3).map(|i| format!("r{i}")).collect();
    let opts = FilterOptions {
        name_mode: kira_fqfilter::NameMode::Short,
        ..FilterOptions::default()
    };

    c.bench_function("filter_2000_paired", |b| {
        b.iter(|| {
            let engine = FilterEngine::new(&names, opts.clone());
            let mut inputs = vec![
                LineReader::from_bufread(BufReader::new(std::io::Cursor::new(r1.clone()))),
                LineReader::from_bufread(BufReader::new(std::io::Cursor::new(r2.clone()))),
            ];
            let mut sink = OutputSink::PerStream(vec![Vec::<u8>::new(), Vec::new()]);
            engine.run(&mut inputs, &mut sink).unwrap().included
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
