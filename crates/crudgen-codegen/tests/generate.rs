use crudgen_codegen::java::{Call, Expr};
use crudgen_codegen::{generate, Config, GeneratedClass, Generator, Runtime};
use crudgen_core::{
    Accessors, ClassName, Driver, EntityDescriptor, Extending, FieldDescriptor,
    RepositoryDeclaration, RepositoryDescriptor, TypeName,
};
use pretty_assertions::assert_eq;

fn class_name(src: &str) -> ClassName {
    ClassName::parse(src).unwrap()
}

fn ty(src: &str) -> TypeName {
    TypeName::parse(src).unwrap()
}

fn field(name: &str, ty_src: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, ty(ty_src)).unwrap()
}

fn order_repository(driver: Driver, fields: &[(&str, &str)]) -> RepositoryDescriptor {
    let entity = EntityDescriptor::builder(class_name("model.Order"), "orders")
        .pk(field("id", "java.lang.Long"))
        .fields(fields.iter().map(|(name, ty)| field(name, ty)))
        .build()
        .unwrap();

    RepositoryDescriptor::new(
        class_name("repository.impl.OrderRepositoryImpl"),
        RepositoryDeclaration::new(class_name("repository.OrderRepository"), driver),
        entity,
    )
    .unwrap()
}

fn order_scenario() -> RepositoryDescriptor {
    order_repository(
        Driver::Postgresql,
        &[("total", "java.lang.Double"), ("status", "java.lang.String")],
    )
}

fn methods(chain: &[&Call]) -> Vec<String> {
    chain.iter().map(|call| call.method.clone()).collect()
}

fn registered_name(call: &Call) -> &str {
    match &call.args[0] {
        Expr::Str(name) => name,
        other => panic!("expected a field name; actual={other:?}"),
    }
}

#[test]
fn order_scenario_source() {
    let class = generate(&order_scenario());

    assert_eq!(
        class.to_source(),
        r#"package repository.impl;

import com.github.longdt.vertxorm.repository.RowMapper;
import com.github.longdt.vertxorm.repository.base.RowMapperImpl;
import com.github.longdt.vertxorm.repository.postgresql.AbstractCrudRepository;
import io.vertx.sqlclient.Pool;
import javax.annotation.processing.Generated;
import model.Order;
import repository.OrderRepository;

@Generated(value = "crudgen", comments = "Do not edit this file")
public class OrderRepositoryImpl extends AbstractCrudRepository<Long, Order> implements OrderRepository {
  public OrderRepositoryImpl(Pool pool) {
    var mapperBuilder = RowMapper.<Long, Order>builder("orders", Order::new)
        .pk("id", Order::getId, Order::setId, true)
        .addField("total", Order::getTotal, Order::setTotal)
        .addField("status", Order::getStatus, Order::setStatus);
    init(pool, (RowMapperImpl<Long, Order>) mapperBuilder.build());
  }
}
"#
    );
}

#[test]
fn order_scenario_structure() {
    let class = generate(&order_scenario());
    let order = TypeName::from(ClassName::new("model", "Order"));
    let long = ty("java.lang.Long");

    let chain = class.mapper_chain();
    assert_eq!(methods(&chain), ["builder", "pk", "addField", "addField"]);

    let builder = chain[0];
    assert_eq!(builder.type_args, [long.clone(), order.clone()]);
    assert_eq!(
        builder.args,
        [Expr::str("orders"), Expr::method_ref(order.clone(), "new")]
    );

    assert_eq!(
        chain[1].args,
        [
            Expr::str("id"),
            Expr::method_ref(order.clone(), "getId"),
            Expr::method_ref(order.clone(), "setId"),
            Expr::Bool(true),
        ]
    );
    assert_eq!(
        chain[3].args,
        [
            Expr::str("status"),
            Expr::method_ref(order.clone(), "getStatus"),
            Expr::method_ref(order.clone(), "setStatus"),
        ]
    );

    let constructor = class.constructor();
    assert_eq!(constructor.params.len(), 1);
    assert_eq!(constructor.params[0].name, "pool");
    assert_eq!(constructor.params[0].ty, ty("io.vertx.sqlclient.Pool"));

    let init = constructor.body[1].expr().as_call().unwrap();
    assert_eq!(init.method, "init");
    assert!(init.target.is_none());
    assert_eq!(init.args[0], Expr::name("pool"));
    assert!(matches!(
        &init.args[1],
        Expr::Cast { ty, .. } if ty.to_string()
            == "com.github.longdt.vertxorm.repository.base.RowMapperImpl<java.lang.Long, model.Order>"
    ));

    assert_eq!(
        class.superclass().unwrap().to_string(),
        "com.github.longdt.vertxorm.repository.postgresql.AbstractCrudRepository<java.lang.Long, model.Order>"
    );
    assert_eq!(class.superinterfaces(), [ty("repository.OrderRepository")]);
    assert_eq!(class.originating_elements(), [class_name("repository.OrderRepository")]);
}

#[test]
fn generation_is_deterministic() {
    let descriptor = order_scenario();
    let generator = Generator::default();

    let first = generator.generate(&descriptor);
    let second = generator.generate(&descriptor);

    assert_eq!(first, second);
    assert_eq!(first.to_source(), second.to_source());
    assert_eq!(first.to_string(), generate(&descriptor.clone()).to_source());
}

#[test]
fn primary_key_is_registered_first_in_any_field_order() {
    let forward = generate(&order_repository(
        Driver::Postgresql,
        &[("a", "java.lang.String"), ("b", "java.lang.String"), ("c", "java.lang.String")],
    ));
    let reversed = generate(&order_repository(
        Driver::Postgresql,
        &[("c", "java.lang.String"), ("b", "java.lang.String"), ("a", "java.lang.String")],
    ));

    for class in [&forward, &reversed] {
        let chain = class.mapper_chain();
        assert_eq!(methods(&chain), ["builder", "pk", "addField", "addField", "addField"]);
        assert_eq!(registered_name(chain[1]), "id");
    }

    let names = |class: &GeneratedClass| -> Vec<String> {
        class.mapper_chain()[2..]
            .iter()
            .map(|call| registered_name(call).to_string())
            .collect()
    };

    assert_eq!(names(&forward), ["a", "b", "c"]);
    assert_eq!(names(&reversed), ["c", "b", "a"]);
}

#[test]
fn entity_with_only_a_primary_key() {
    let class = generate(&order_repository(Driver::Mysql, &[]));
    let chain = class.mapper_chain();

    assert_eq!(methods(&chain), ["builder", "pk"]);
    assert!(class.to_source().contains(
        "RowMapper.<Long, Order>builder(\"orders\", Order::new)\n        .pk(\"id\", Order::getId, Order::setId, true);\n"
    ));
    assert!(!class.to_source().contains("addField"));
}

#[test]
fn dialect_selects_default_base() {
    for driver in Driver::ALL {
        let class = generate(&order_repository(driver, &[]));
        let superclass = class.superclass().unwrap();

        assert_eq!(
            superclass.raw().unwrap().canonical_name(),
            format!("com.github.longdt.vertxorm.repository.{driver}.AbstractCrudRepository")
        );
        assert_eq!(
            superclass.args(),
            [ty("java.lang.Long"), ty("model.Order")]
        );
    }
}

#[test]
fn explicit_superclass_is_used_verbatim() {
    let base = ty("com.acme.CustomBase<java.lang.Long, model.Order>");
    let descriptor = order_repository(Driver::Postgresql, &[("total", "java.lang.Double")])
        .with_extending(Extending::Explicit(base.clone()))
        .unwrap();

    let class = generate(&descriptor);
    let source = class.to_source();

    assert_eq!(class.superclass(), Some(&base));
    assert!(source.contains(
        "public class OrderRepositoryImpl extends CustomBase<Long, Order> implements OrderRepository {"
    ));
    assert!(source.contains("import com.acme.CustomBase;\n"));
    assert!(!source.contains("AbstractCrudRepository"));
}

#[test]
fn explicit_accessors_are_emitted() {
    let entity = EntityDescriptor::builder(class_name("model.Account"), "accounts")
        .pk(field("uuid", "java.util.UUID")
            .with_accessors(Accessors::new("uuid", "assignUuid").unwrap()))
        .field(field("active", "java.lang.Boolean")
            .with_accessors(Accessors::new("isActive", "setActive").unwrap()))
        .build()
        .unwrap();

    let descriptor = RepositoryDescriptor::new(
        class_name("repo.AccountRepositoryImpl"),
        RepositoryDeclaration::new(class_name("repo.AccountRepository"), Driver::Mysql),
        entity,
    )
    .unwrap();

    let source = generate(&descriptor).to_source();

    assert!(source.contains(".pk(\"uuid\", Account::uuid, Account::assignUuid, true)"));
    assert!(source.contains(".addField(\"active\", Account::isActive, Account::setActive);"));
    assert!(source.contains("import java.util.UUID;\n"));
    assert!(source.contains("extends AbstractCrudRepository<UUID, Account> implements AccountRepository"));
}

#[test]
fn custom_config() {
    let config = Config::new()
        .generated(None)
        .indent("    ")
        .runtime(
            Runtime::new()
                .pool(class_name("com.acme.db.Pool"))
                .base_class_for(Driver::Postgresql, class_name("com.acme.PgRepository")),
        );

    let class = Generator::new(config).generate(&order_repository(Driver::Postgresql, &[]));
    let source = class.to_source();

    assert!(class.type_spec().annotations.is_empty());
    assert!(!source.contains("@Generated"));
    assert!(source.contains("public class OrderRepositoryImpl extends PgRepository<Long, Order>"));
    assert!(source.contains("\n    public OrderRepositoryImpl(Pool pool) {\n"));
    assert!(source.contains("\n        var mapperBuilder = "));
    assert!(source.contains("\n                .pk(\"id\""));
    assert!(source.contains("import com.acme.db.Pool;\n"));
}

#[test]
fn java_lang_imports_can_be_kept() {
    let config = Config::new().skip_java_lang_imports(false);
    let source = Generator::new(config)
        .generate(&order_scenario())
        .to_source();

    assert!(source.contains("import java.lang.Long;\n"));
    // field types never appear in the generated class
    assert!(!source.contains("java.lang.Double"));
}

#[test]
fn clashing_simple_names_are_qualified() {
    let config = Config::new().runtime(Runtime::new().pool(class_name("model.Pool")));
    let entity = EntityDescriptor::builder(class_name("model.Pool"), "pools")
        .pk(field("id", "java.lang.Long"))
        .build()
        .unwrap();
    let descriptor = RepositoryDescriptor::new(
        class_name("repo.PoolRepositoryImpl"),
        RepositoryDeclaration::new(class_name("repo.PoolRepository"), Driver::Postgresql),
        entity,
    )
    .unwrap();
    let base = Generator::new(config).generate(&descriptor).to_source();
    assert!(base.contains("import model.Pool;\n"));

    // Entity `model.Pool` next to the default `io.vertx.sqlclient.Pool`
    let source = generate(&descriptor).to_source();

    assert!(source.contains("public PoolRepositoryImpl(io.vertx.sqlclient.Pool pool) {"));
    assert!(source.contains("RowMapper.<Long, model.Pool>builder(\"pools\", model.Pool::new)"));
    assert!(!source.contains("import model.Pool;"));
    assert!(!source.contains("import io.vertx.sqlclient.Pool;"));
}

#[test]
fn string_literals_are_escaped() {
    let entity = EntityDescriptor::builder(class_name("model.Order"), "\"odd\"\\table\n\u{1}")
        .pk(field("id", "java.lang.Long"))
        .build()
        .unwrap();
    let descriptor = RepositoryDescriptor::new(
        class_name("repository.impl.OrderRepositoryImpl"),
        RepositoryDeclaration::new(class_name("repository.OrderRepository"), Driver::Postgresql),
        entity,
    )
    .unwrap();

    let source = generate(&descriptor).to_source();
    assert!(source.contains(r#"builder("\"odd\"\\table\n\u0001", Order::new)"#));
}

#[test]
fn default_package_unit() {
    let entity = EntityDescriptor::builder(class_name("Order"), "orders")
        .pk(field("id", "Long"))
        .build()
        .unwrap();
    let descriptor = RepositoryDescriptor::new(
        class_name("OrderRepositoryImpl"),
        RepositoryDeclaration::new(class_name("OrderRepository"), Driver::Postgresql),
        entity,
    )
    .unwrap();

    let source = generate(&descriptor).to_source();
    assert!(source.starts_with("import com.github.longdt.vertxorm.repository.RowMapper;\n"));
    assert!(!source.contains("package"));
    assert!(source.contains("extends AbstractCrudRepository<Long, Order> implements OrderRepository {"));
}

#[test]
fn primitive_and_array_fields() {
    let descriptor = order_repository(
        Driver::Postgresql,
        &[
            ("quantity", "int"),
            ("payload", "byte[]"),
            ("tags", "java.util.List<? extends model.Tag>"),
        ],
    );

    let class = generate(&descriptor);
    let source = class.to_source();

    assert_eq!(
        methods(&class.mapper_chain()),
        ["builder", "pk", "addField", "addField", "addField"]
    );
    assert!(source.contains(".addField(\"quantity\", Order::getQuantity, Order::setQuantity)"));
    assert!(source.contains(".addField(\"payload\", Order::getPayload, Order::setPayload)"));
    assert!(source.contains(".addField(\"tags\", Order::getTags, Order::setTags);"));

    // Field types are not part of the generated class
    assert!(!source.contains("import java.util.List;"));
    assert!(!source.contains("model.Tag"));
}

#[test]
fn array_primary_key() {
    let entity = EntityDescriptor::builder(class_name("model.Blob"), "blobs")
        .pk(field("hash", "byte[]"))
        .build()
        .unwrap();
    let descriptor = RepositoryDescriptor::new(
        class_name("repo.BlobRepositoryImpl"),
        RepositoryDeclaration::new(class_name("repo.BlobRepository"), Driver::Mysql),
        entity,
    )
    .unwrap();

    let source = generate(&descriptor).to_source();

    assert!(source.contains("extends AbstractCrudRepository<byte[], Blob> implements BlobRepository {"));
    assert!(source.contains("RowMapper.<byte[], Blob>builder(\"blobs\", Blob::new)"));
    assert!(source.contains("(RowMapperImpl<byte[], Blob>) mapperBuilder.build()"));
}
