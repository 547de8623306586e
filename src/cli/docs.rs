//! Syntax reference for the relexpr CLI

/// Get the relation expression syntax reference
pub fn syntax_reference() -> &'static str {
    r#"RELATION EXPRESSIONS

A relation expression names the related entities to fetch with a query.

CHAINS
------
A dot fetches a relation through another one.

  relexpr check 'owner.pets.toys'
  => owner.pets.toys

ARRAYS
------
Square brackets branch the tree. Each comma separated entry is a full chain.

  relexpr check 'owner.[pets.toys, address]'
  => owner.[pets.toys, address]

  relexpr check '[owner, address]'
  => [owner, address]

WILDCARD
--------
A lone * fetches every relation, at every depth.

  relexpr relation '*' owner pets
  => *

RECURSION
---------
^ as the only child makes a relation recurse into itself.

  relexpr relation 'parent.^' parent parent
  => parent.^

CONTAINMENT
-----------
An expression contains another when every path of the other one exists in it.

  relexpr contains 'children.[movies.actors, pets]' 'children.movies'
  => true

  relexpr contains 'children.movies' 'children.[movies, pets]'
  => false

ERRORS
------
Empty names (a..b, a.[b,]) and unbalanced brackets (a.[b) are rejected:

  invalid relation expression: a..b

Whitespace around names is ignored. There is no escaping for . , [ ]
"#
}
