use criterion::{black_box, criterion_group, criterion_main, Criterion};
use review_record::extract::MetadataExtractor;
use review_record::filter::filter_commits;
use review_record::model::ReviewCriteria;
use review_record::svn::parse_log;

fn synthetic_log(entries: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<log>\n");
    for rev in (1..=entries).rev() {
        xml.push_str(&format!(
            "<logentry revision=\"{rev}\"><author>dev{}</author>\
             <date>2024-01-01T00:00:00.000000Z</date><paths>\
             <path action=\"M\" kind=\"file\">/trunk/src/file{rev}.c</path>\
             <path action=\"A\" kind=\"file\">/trunk/include/file{rev}.h</path>\
             </paths><msg>change {rev} &lt;reviewer{}&gt; [pj{}] [wp{}]</msg></logentry>\n",
            rev % 7,
            rev % 5,
            rev % 3,
            rev % 4
        ));
    }
    xml.push_str("</log>\n");
    xml
}

fn bench_parse(c: &mut Criterion) {
    let extractor = MetadataExtractor::new().unwrap();
    let xml = synthetic_log(5_000);

    c.bench_function("parse_log 5k entries", |b| {
        b.iter(|| parse_log(black_box(&xml), &extractor).unwrap())
    });

    let commits = parse_log(&xml, &extractor).unwrap();
    let criteria = ReviewCriteria::new().with_reviewer("Reviewer3").with_project("1");
    c.bench_function("filter_commits 5k entries", |b| {
        b.iter(|| filter_commits(black_box(&commits), &criteria))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
